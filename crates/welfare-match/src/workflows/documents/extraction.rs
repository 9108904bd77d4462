use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

macro_rules! field_pattern {
    ($name:ident, $regex_str:expr) => {
        static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

field_pattern!(
    RE_EMAIL,
    r"\b[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}\b"
);

// Ten-digit mobile number.
field_pattern!(RE_PHONE, r"\b\d{10}\b");

// Twelve-digit national ID, optionally grouped 4-4-4.
field_pattern!(RE_NATIONAL_ID, r"\b\d{4}\s?\d{4}\s?\d{4}\b");

// Permanent account number: five letters, four digits, one letter.
field_pattern!(RE_TAX_ID, r"\b[A-Z]{5}\d{4}[A-Z]\b");

/// Fields recovered from a document's text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedDocument {
    pub raw_text: String,
    pub emails: Vec<String>,
    pub phones: Vec<String>,
    pub national_id_numbers: Vec<String>,
    pub tax_id_numbers: Vec<String>,
}

fn find_all(pattern: &LazyLock<Option<Regex>>, text: &str) -> Vec<String> {
    match pattern.as_ref() {
        Some(regex) => regex
            .find_iter(text)
            .map(|found| found.as_str().to_string())
            .collect(),
        None => Vec::new(),
    }
}

pub fn extract_fields(text: &str) -> ExtractedDocument {
    ExtractedDocument {
        raw_text: text.to_string(),
        emails: find_all(&RE_EMAIL, text),
        phones: find_all(&RE_PHONE, text),
        national_id_numbers: find_all(&RE_NATIONAL_ID, text),
        tax_id_numbers: find_all(&RE_TAX_ID, text),
    }
}
