use serde::{Deserialize, Serialize};

/// Subjects whose chapters are treated as flat content by consumers.
pub const DEFAULT_FLAT_SUBJECTS: &[&str] = &["0606"];

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Subject ids built with [crate::model::Course::has_topics] set to false.
    pub flat_subjects: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            flat_subjects: DEFAULT_FLAT_SUBJECTS
                .iter()
                .map(|id| id.to_string())
                .collect(),
        }
    }
}

impl Config {
    pub fn has_topics(&self, subject_id: &str) -> bool {
        !self.flat_subjects.iter().any(|id| id == subject_id)
    }
}
