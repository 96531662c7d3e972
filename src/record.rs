//! The fixed-shape record produced for every document.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Marker printed for absent fields.
pub const ABSENT_MARKER: &str = "unknown";

/// The nine named slots of an [`ExtractedRecord`], in extraction order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    MobileNumber,
    Skills,
    Education,
    Experience,
    Competencies,
    MeasurableResults,
    Linkedin,
}

impl Field {
    /// Every field, in the order the assembler fills them.
    pub const ALL: [Field; 9] = [
        Field::Name,
        Field::Email,
        Field::MobileNumber,
        Field::Skills,
        Field::Education,
        Field::Experience,
        Field::Competencies,
        Field::MeasurableResults,
        Field::Linkedin,
    ];

    /// The record key for this field.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::MobileNumber => "mobile_number",
            Field::Skills => "skills",
            Field::Education => "education",
            Field::Experience => "experience",
            Field::Competencies => "competencies",
            Field::MeasurableResults => "measurable_results",
            Field::Linkedin => "linkedin",
        }
    }

    /// Whether the slot holds a list rather than a single string.
    pub fn is_list(&self) -> bool {
        matches!(
            self,
            Field::Skills
                | Field::Education
                | Field::Experience
                | Field::Competencies
                | Field::MeasurableResults
        )
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| Error::Other(format!("Unknown field: {}", s)))
    }
}

/// Borrowed view of one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// Nothing was found
    Absent,
    /// A single string
    Text(&'a str),
    /// An ordered list (possibly empty)
    List(&'a [String]),
}

impl FieldValue<'_> {
    /// Whether the slot is absent.
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Absent => f.write_str(ABSENT_MARKER),
            FieldValue::Text(text) => write!(f, "{:?}", text),
            FieldValue::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{:?}", item)?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Structured fields extracted from one resume.
///
/// Every slot is always present; `None` is the explicit absent value.
/// `Default` is the record with nothing found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedRecord {
    pub name: Option<String>,
    pub email: Option<String>,
    pub mobile_number: Option<String>,
    pub skills: Option<Vec<String>>,
    pub education: Option<Vec<String>>,
    pub experience: Option<Vec<String>>,
    pub competencies: Option<Vec<String>>,
    pub measurable_results: Option<Vec<String>>,
    pub linkedin: Option<String>,
}

impl ExtractedRecord {
    /// Create a record with every field absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get one slot by name.
    pub fn get(&self, field: Field) -> FieldValue<'_> {
        fn text(value: &Option<String>) -> FieldValue<'_> {
            value
                .as_deref()
                .map_or(FieldValue::Absent, FieldValue::Text)
        }
        fn list(value: &Option<Vec<String>>) -> FieldValue<'_> {
            value
                .as_deref()
                .map_or(FieldValue::Absent, FieldValue::List)
        }

        match field {
            Field::Name => text(&self.name),
            Field::Email => text(&self.email),
            Field::MobileNumber => text(&self.mobile_number),
            Field::Skills => list(&self.skills),
            Field::Education => list(&self.education),
            Field::Experience => list(&self.experience),
            Field::Competencies => list(&self.competencies),
            Field::MeasurableResults => list(&self.measurable_results),
            Field::Linkedin => text(&self.linkedin),
        }
    }

    /// Iterate over all nine slots in record order.
    pub fn fields(&self) -> impl Iterator<Item = (Field, FieldValue<'_>)> {
        Field::ALL.into_iter().map(move |field| (field, self.get(field)))
    }

    /// Number of slots holding a value.
    pub fn present_count(&self) -> usize {
        self.fields().filter(|(_, value)| !value.is_absent()).count()
    }
}

impl fmt::Display for ExtractedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (field, value)) in self.fields().enumerate() {
            if i > 0 {
                f.write_str(",\n ")?;
            }
            write!(f, "{:?}: {}", field.key(), value)?;
        }
        f.write_str("}")
    }
}
