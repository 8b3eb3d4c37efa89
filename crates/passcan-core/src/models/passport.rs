//! Passport record model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four identity fields the extractor looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    PassportNumber,
    FullName,
    DateOfBirth,
    CountryCode,
}

impl Field {
    /// All fields, in record order.
    pub const ALL: [Field; 4] = [
        Field::PassportNumber,
        Field::FullName,
        Field::DateOfBirth,
        Field::CountryCode,
    ];

    /// Whether extraction fails when this field is not found.
    pub fn is_mandatory(&self) -> bool {
        matches!(self, Field::PassportNumber | Field::FullName)
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Field::PassportNumber => "Passport number",
            Field::FullName => "Full name",
            Field::DateOfBirth => "Date of birth",
            Field::CountryCode => "Country code",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identity fields recovered from one OCR pass.
///
/// A record produced by the extractor always has a non-empty passport number
/// and full name. Date of birth and country code are empty strings when they
/// were not found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassportRecord {
    /// Holder's name as printed, e.g. `JOHN MICHAEL SMITH`.
    pub full_name: String,

    /// `YY/MM/DD`, no century.
    #[serde(default)]
    pub date_of_birth: String,

    /// One uppercase letter followed by eight digits.
    pub passport_number: String,

    /// Three uppercase letters. Not checked against ISO 3166.
    #[serde(default)]
    pub country_code: String,
}

impl PassportRecord {
    /// Get the value of a field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::PassportNumber => &self.passport_number,
            Field::FullName => &self.full_name,
            Field::DateOfBirth => &self.date_of_birth,
            Field::CountryCode => &self.country_code,
        }
    }

    /// Check the record before it is handed on, e.g. after manual edits.
    ///
    /// Only the mandatory fields are checked, and only for being blank.
    /// Issues are reported name first, then passport number.
    pub fn validate(&self) -> Vec<String> {
        [Field::FullName, Field::PassportNumber]
            .iter()
            .filter(|field| self.get(**field).trim().is_empty())
            .map(|field| format!("{} is required", field.label()))
            .collect()
    }

    /// Whether all mandatory fields are present.
    pub fn is_complete(&self) -> bool {
        self.validate().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record() -> PassportRecord {
        PassportRecord {
            full_name: "JOHN MICHAEL SMITH".to_string(),
            date_of_birth: "85/04/13".to_string(),
            passport_number: "A12345678".to_string(),
            country_code: "UTO".to_string(),
        }
    }

    #[test]
    fn test_validate_complete() {
        assert!(record().validate().is_empty());
        assert!(record().is_complete());
    }

    #[test]
    fn test_validate_optional_fields_blank() {
        let record = PassportRecord {
            date_of_birth: String::new(),
            country_code: String::new(),
            ..record()
        };
        assert!(record.is_complete());
    }

    #[test]
    fn test_validate_missing_mandatory() {
        let record = PassportRecord {
            full_name: "   ".to_string(),
            passport_number: String::new(),
            ..record()
        };
        assert_eq!(
            record.validate(),
            vec![
                "Full name is required".to_string(),
                "Passport number is required".to_string(),
            ]
        );
    }

    #[test]
    fn test_validate_single_missing_field() {
        let record = PassportRecord {
            passport_number: " \t".to_string(),
            ..record()
        };
        assert_eq!(record.validate(), vec!["Passport number is required".to_string()]);
        assert!(!record.is_complete());
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(record()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "fullName": "JOHN MICHAEL SMITH",
                "dateOfBirth": "85/04/13",
                "passportNumber": "A12345678",
                "countryCode": "UTO",
            })
        );
    }

    #[test]
    fn test_optional_fields_default_on_deserialize() {
        let record: PassportRecord =
            serde_json::from_str(r#"{"fullName": "JANE DOE", "passportNumber": "B98765432"}"#)
                .unwrap();
        assert_eq!(record.date_of_birth, "");
        assert_eq!(record.country_code, "");
        assert_eq!(record.get(Field::FullName), "JANE DOE");
    }
}
