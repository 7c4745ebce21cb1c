use serde::Serialize;

use crate::model::{variant_index, CourseVariant};

/// A fully built subject: metadata, every variant and all of their chapters.
#[derive(Debug, Default, Clone, Eq, PartialEq, Serialize)]
pub struct Course {
    /// Subject identifier, e.g. `0580`.
    pub id: String,
    pub name: String,
    /// Tells consumers whether chapters should be split into their topics or treated as flat
    /// content. Building a [Course] never looks at this flag; topics are always extracted.
    pub has_topics: bool,
    pub variants: Vec<CourseVariant>,
}

impl Course {
    /// Looks up a variant by name, falling back to its id.
    pub fn variant(&self, key: &str) -> Option<&CourseVariant> {
        variant_index(&self.variants, key).map(|i| &self.variants[i])
    }

    pub fn variant_names(&self) -> impl Iterator<Item = &str> {
        self.variants.iter().map(|variant| variant.name.as_str())
    }
}
