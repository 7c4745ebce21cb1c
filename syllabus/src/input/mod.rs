use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

pub use buffer::Buffer;
pub use dir::Dir;

mod buffer;
mod dir;

/// An [Input] supplies the two content files of each subject to a
/// [crate::registry::Registry].
///
/// Files are small, hand-authored artifacts, so an [Input] holds them whole in memory.
pub trait Input {
    /// Every subject id that has at least one content file.
    fn subject_ids(&self) -> BTreeSet<String>;

    /// The contents of the `kind` file of `subject_id`, if it exists.
    fn data(&self, subject_id: &str, kind: ContentKind) -> Option<&str>;
}

/// The two files each subject is built from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ContentKind {
    /// Structured text naming the course and its variants.
    Metadata,
    /// JSON array of chapter groups.
    Content,
}

impl ContentKind {
    pub const ALL: [ContentKind; 2] = [ContentKind::Metadata, ContentKind::Content];

    pub fn extension(&self) -> &'static str {
        match self {
            ContentKind::Metadata => "md",
            ContentKind::Content => "json",
        }
    }

    pub fn from_extension(extension: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.extension() == extension)
    }

    pub fn file_name(&self, subject_id: &str) -> String {
        format!("{}.{}", subject_id, self.extension())
    }
}

impl Display for ContentKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentKind::Metadata => f.write_str("metadata (.md)"),
            ContentKind::Content => f.write_str("content (.json)"),
        }
    }
}
