//! WASM bindings for passport OCR text extraction.
//!
//! This crate provides WebAssembly bindings for use in browsers and Node.js.
//! OCR runs on the JS side; only the recognized text crosses the boundary.

use wasm_bindgen::prelude::*;

use passcan_core::{PassportExtractor as _, PassportParser, PassportRecord};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Extract passport data from recognized text.
///
/// Resolves to `{ fullName, dateOfBirth, passportNumber, countryCode }`, or
/// throws "no passport data found".
#[wasm_bindgen]
pub fn extract_passport_from_text(text: &str) -> Result<JsValue, JsValue> {
    extract_with(&PassportParser::new(), text)
}

/// Validate a (possibly user-edited) record.
///
/// Returns the list of problems; an empty list means the record is complete.
#[wasm_bindgen]
pub fn validate_record(record: JsValue) -> Result<Vec<String>, JsValue> {
    let record: PassportRecord = serde_wasm_bindgen::from_value(record)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(record.validate())
}

/// Passport extractor class for browser use.
#[wasm_bindgen]
pub struct PassportExtractor {
    parser: PassportParser,
}

#[wasm_bindgen]
impl PassportExtractor {
    /// Create a new passport extractor.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            parser: PassportParser::new(),
        }
    }

    /// Minimum length of a candidate line, in characters.
    #[wasm_bindgen(getter = minLineLength)]
    pub fn min_line_length(&self) -> usize {
        self.parser.min_line_length()
    }

    #[wasm_bindgen(setter = minLineLength)]
    pub fn set_min_line_length(&mut self, min_length: usize) {
        self.parser = PassportParser::new().with_min_line_length(min_length);
    }

    /// Extract passport data from text.
    #[wasm_bindgen]
    pub fn extract(&self, text: &str) -> Result<JsValue, JsValue> {
        extract_with(&self.parser, text)
    }

    /// Extract passport data together with the line each field came from.
    #[wasm_bindgen(js_name = extractWithSources)]
    pub fn extract_with_sources(&self, text: &str) -> Result<JsValue, JsValue> {
        let result = self
            .parser
            .extract_detailed(text)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        serde_wasm_bindgen::to_value(&result).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for PassportExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn extract_with(parser: &PassportParser, text: &str) -> Result<JsValue, JsValue> {
    let record = parser
        .extract(text)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&record).map_err(|e| JsValue::from_str(&e.to_string()))
}
