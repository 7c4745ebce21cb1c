use serde::Serialize;

use crate::model::Chapter;

/// A named assessment configuration of a [crate::model::Course], such as a specific combination
/// of exam papers.
#[derive(Debug, Default, Clone, Eq, PartialEq, Serialize)]
pub struct CourseVariant {
    /// Name used to refer to the variant from the content file.
    pub name: String,
    /// Short token such as `AS-level-paper-1,2`.
    pub id: String,
    pub description: String,
    pub chapters: Vec<Chapter>,
}

impl CourseVariant {
    pub fn new(name: impl ToString, id: impl ToString, description: impl ToString) -> Self {
        Self {
            name: name.to_string(),
            id: id.to_string(),
            description: description.to_string(),
            chapters: vec![],
        }
    }
}

/// Finds the variant referred to by `key`. Names take precedence over ids.
pub fn variant_index(variants: &[CourseVariant], key: &str) -> Option<usize> {
    variants
        .iter()
        .position(|variant| variant.name == key)
        .or_else(|| variants.iter().position(|variant| variant.id == key))
}
