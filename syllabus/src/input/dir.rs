use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use globset::Glob;
use log::{debug, info};
use walkdir::WalkDir;

use crate::input::{Buffer, ContentKind, Input};

/// Subject files found directly inside a content directory, named `<subject id>.md` and
/// `<subject id>.json`.
#[derive(Debug, Default)]
pub struct Dir {
    buffer: Buffer,
}

impl Dir {
    /// Loads every content file in `root` into memory. Errors if any fail to be read.
    /// Subdirectories and files with other extensions are ignored.
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(anyhow!(
                "content directory '{}' does not exist or is not a directory",
                root.display()
            ));
        }
        let matcher = Glob::new("*.{md,json}")?.compile_matcher();
        let mut buffer = Buffer::new();
        for entry in WalkDir::new(root).min_depth(1).max_depth(1).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() || !matcher.is_match(entry.file_name()) {
                continue;
            }
            let path = entry.path();
            let (subject_id, kind) = match subject_file(path) {
                Some(parts) => parts,
                None => continue,
            };
            let data = fs::read_to_string(path)
                .with_context(|| format!("Failed to read content file: {}", path.display()))?;
            debug!("loaded {} file for subject '{}'", kind, subject_id);
            buffer.insert(subject_id, kind, data);
        }
        info!(
            "found {} subjects in '{}'",
            buffer.subject_ids().len(),
            root.display()
        );
        Ok(Self { buffer })
    }
}

impl Input for Dir {
    fn subject_ids(&self) -> BTreeSet<String> {
        self.buffer.subject_ids()
    }

    fn data(&self, subject_id: &str, kind: ContentKind) -> Option<&str> {
        self.buffer.data(subject_id, kind)
    }
}

fn subject_file(path: &Path) -> Option<(String, ContentKind)> {
    let kind = ContentKind::from_extension(path.extension()?.to_str()?)?;
    let subject_id = path.file_stem()?.to_str()?;
    Some((subject_id.to_string(), kind))
}
