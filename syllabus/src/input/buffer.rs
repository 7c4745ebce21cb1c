use std::collections::{BTreeMap, BTreeSet};

use crate::input::{ContentKind, Input};

/// Stores every file in memory. Useful for tests and for callers that fetch content themselves.
#[derive(Debug, Default, Clone)]
pub struct Buffer {
    files: BTreeMap<String, SubjectFiles>,
}

#[derive(Debug, Default, Clone)]
struct SubjectFiles {
    metadata: Option<String>,
    content: Option<String>,
}

impl Buffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_metadata(mut self, subject_id: impl ToString, data: impl ToString) -> Self {
        self.insert(subject_id, ContentKind::Metadata, data);
        self
    }

    pub fn with_content(mut self, subject_id: impl ToString, data: impl ToString) -> Self {
        self.insert(subject_id, ContentKind::Content, data);
        self
    }

    /// Sets the `kind` file of `subject_id`, replacing any previous data.
    pub fn insert(&mut self, subject_id: impl ToString, kind: ContentKind, data: impl ToString) {
        let files = self.files.entry(subject_id.to_string()).or_default();
        let slot = match kind {
            ContentKind::Metadata => &mut files.metadata,
            ContentKind::Content => &mut files.content,
        };
        *slot = Some(data.to_string());
    }
}

impl Input for Buffer {
    fn subject_ids(&self) -> BTreeSet<String> {
        self.files.keys().cloned().collect()
    }

    fn data(&self, subject_id: &str, kind: ContentKind) -> Option<&str> {
        let files = self.files.get(subject_id)?;
        match kind {
            ContentKind::Metadata => files.metadata.as_deref(),
            ContentKind::Content => files.content.as_deref(),
        }
    }
}
