use std::fmt::{Display, Formatter};

use anyhow::Result;

use crate::output::{Chunk, Output};

/// Collects everything written into a single string.
#[derive(Debug, Default)]
pub struct Buffer {
    data: String,
}

impl Display for Buffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.data)
    }
}

impl Output for Buffer {
    fn write_chunk(&mut self, _: &Chunk) -> Result<()> {
        // Buffer does nothing with chunks.
        Ok(())
    }

    fn write(&mut self, data: &str) -> Result<()> {
        self.data.push_str(data);
        Ok(())
    }

    fn newline(&mut self) -> Result<()> {
        self.data.push('\n');
        Ok(())
    }
}
