//! Regex patterns for passport field matching.
//!
//! Character classes are spelled out as ASCII ranges so that non-Latin digits
//! and letters in OCR noise never match.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // One uppercase letter followed by eight digits, anywhere in the line.
    // A longer digit run still yields its first nine characters.
    pub static ref PASSPORT_NUMBER: Regex = Regex::new(
        r"[A-Z][0-9]{8}"
    ).unwrap();

    // Two or more uppercase words of at least two letters, one whitespace
    // character apart.
    pub static ref FULL_NAME: Regex = Regex::new(
        r"[A-Z]{2,}(?:[[:space:]][A-Z]{2,})+"
    ).unwrap();

    // YYMMDD with month 01-12 and day 01-31. The year is unconstrained.
    pub static ref DATE_OF_BIRTH: Regex = Regex::new(
        r"([0-9]{2})(0[1-9]|1[0-2])(0[1-9]|[12][0-9]|3[01])"
    ).unwrap();

    // Any three consecutive uppercase letters.
    pub static ref COUNTRY_CODE: Regex = Regex::new(
        r"[A-Z]{3}"
    ).unwrap();
}
