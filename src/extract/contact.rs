//! Single-match contact fields: email, mobile number, LinkedIn URL.

use regex::Regex;

use super::{DocumentInput, FieldExtractor};
use crate::error::Result;
use crate::record::Field;

const EMAIL_PATTERN: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,7}\b";

/// Ten ASCII digits with word boundaries on both sides.
const MOBILE_PATTERN: &str = r"\b[0-9]{10}\b";

const LINKEDIN_PATTERN: &str = r"(?i)https?://\S*linkedin\.com\S*";

fn first_match(re: &Regex, text: &str) -> Option<String> {
    re.find(text).map(|m| m.as_str().to_string())
}

/// First `local@domain.tld` address in the text.
#[derive(Debug, Clone)]
pub struct EmailExtractor {
    re: Regex,
}

impl EmailExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            re: Regex::new(EMAIL_PATTERN)?,
        })
    }
}

impl FieldExtractor for EmailExtractor {
    type Output = String;

    fn field(&self) -> Field {
        Field::Email
    }

    fn extract(&self, input: &DocumentInput<'_>) -> Option<String> {
        first_match(&self.re, input.text())
    }
}

/// First standalone run of exactly ten digits.
///
/// Country codes, separators and other lengths are not recognized.
#[derive(Debug, Clone)]
pub struct MobileNumberExtractor {
    re: Regex,
}

impl MobileNumberExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            re: Regex::new(MOBILE_PATTERN)?,
        })
    }
}

impl FieldExtractor for MobileNumberExtractor {
    type Output = String;

    fn field(&self) -> Field {
        Field::MobileNumber
    }

    fn extract(&self, input: &DocumentInput<'_>) -> Option<String> {
        first_match(&self.re, input.text())
    }
}

/// First http(s) URL mentioning `linkedin.com`, up to the next whitespace.
#[derive(Debug, Clone)]
pub struct LinkedinExtractor {
    re: Regex,
}

impl LinkedinExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            re: Regex::new(LINKEDIN_PATTERN)?,
        })
    }
}

impl FieldExtractor for LinkedinExtractor {
    type Output = String;

    fn field(&self) -> Field {
        Field::Linkedin
    }

    fn extract(&self, input: &DocumentInput<'_>) -> Option<String> {
        first_match(&self.re, input.text())
    }
}
