use std::collections::BTreeSet;
use std::fs;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use log::debug;

use crate::output::{Chunk, Output};

/// Writes every chunk (one per generated course) to its own file under `root`.
///
/// `root` must be empty when the set is created, and each chunk path may only be opened once,
/// so one run never overwrites a course it already wrote.
#[derive(Debug, Default)]
pub struct FileSet {
    root: PathBuf,
    written: BTreeSet<PathBuf>,
    current: Option<File>,
}

impl FileSet {
    pub fn new<P: Into<PathBuf>>(root: P) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)
            .with_context(|| format!("create output directory '{}'", root.display()))?;
        if !fs::metadata(&root)?.is_dir() {
            return Err(anyhow!("output root '{}' is not a directory", root.display()));
        }
        if fs::read_dir(&root)?.next().is_some() {
            return Err(anyhow!("output root '{}' must be empty", root.display()));
        }
        Ok(Self {
            root,
            ..Default::default()
        })
    }

    /// Chunk paths opened so far, relative to the root.
    pub fn written(&self) -> impl Iterator<Item = &Path> {
        self.written.iter().map(PathBuf::as_path)
    }
}

impl Output for FileSet {
    /// Closes the current file and creates the one named by `chunk`.
    fn write_chunk(&mut self, chunk: &Chunk) -> Result<()> {
        let relative = chunk
            .relative_file_path
            .as_ref()
            .ok_or_else(|| anyhow!("chunks written to a FileSet need a file path"))?;
        if !self.written.insert(relative.clone()) {
            return Err(anyhow!(
                "'{}' was already written by this run",
                relative.display()
            ));
        }

        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        debug!("writing '{}'", path.display());
        self.current = Some(
            File::create(&path)
                .with_context(|| format!("create output file '{}'", path.display()))?,
        );
        Ok(())
    }

    fn write(&mut self, data: &str) -> Result<()> {
        let file = self
            .current
            .as_mut()
            .ok_or_else(|| anyhow!("nothing to write to before the first chunk"))?;
        file.write_all(data.as_bytes())?;
        Ok(())
    }

    fn newline(&mut self) -> Result<()> {
        self.write("\n")
    }
}
