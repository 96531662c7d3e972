use super::{DocumentInput, FieldExtractor};
use crate::record::Field;

/// Takes the first PERSON entity in document order.
///
/// References and former managers listed before the candidate's own name
/// will win; no attempt is made to tell them apart.
#[derive(Debug, Clone, Default)]
pub struct NameExtractor;

impl NameExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl FieldExtractor for NameExtractor {
    type Output = String;

    fn field(&self) -> Field {
        Field::Name
    }

    fn extract(&self, input: &DocumentInput<'_>) -> Option<String> {
        input.analysis().first_person().map(str::to_string)
    }
}
