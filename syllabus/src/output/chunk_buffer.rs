use std::collections::BTreeMap;

use anyhow::{anyhow, Result};

use crate::output::{Buffer, Chunk, Output};

/// A collection of [Buffer]s, one per chunk, indexed by their file path as a string.
#[derive(Debug, Default)]
pub struct ChunkBuffer {
    data: BTreeMap<String, Buffer>,
    latest: String,
}

impl ChunkBuffer {
    pub fn data(&self, key: &str) -> Option<&Buffer> {
        self.data.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    fn latest_mut(&mut self) -> Result<&mut Buffer> {
        self.data
            .get_mut(&self.latest)
            .ok_or_else(|| anyhow!("cannot write to a ChunkBuffer before 'write_chunk'"))
    }
}

impl Output for ChunkBuffer {
    fn write_chunk(&mut self, chunk: &Chunk) -> Result<()> {
        let latest = match &chunk.relative_file_path {
            None => return Err(anyhow!("ChunkBuffer chunks must have relative file paths")),
            Some(path) => path.to_string_lossy().replace('\\', "/"),
        };
        self.data.insert(latest.clone(), Buffer::default());
        self.latest = latest;
        Ok(())
    }

    fn write(&mut self, data: &str) -> Result<()> {
        self.latest_mut()?.write(data)
    }

    fn newline(&mut self) -> Result<()> {
        self.latest_mut()?.newline()
    }
}
