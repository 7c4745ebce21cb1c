use std::io::{stdout, Write};

use anyhow::Result;

use crate::output::{Chunk, Output};

/// Writes everything to stdout, separating chunks with a blank line.
#[derive(Debug, Default)]
pub struct StdOut {
    chunks: usize,
}

impl Output for StdOut {
    fn write_chunk(&mut self, _: &Chunk) -> Result<()> {
        if self.chunks > 0 {
            self.newline()?;
        }
        self.chunks += 1;
        Ok(())
    }

    fn write(&mut self, data: &str) -> Result<()> {
        stdout().lock().write_all(data.as_bytes())?;
        Ok(())
    }

    fn newline(&mut self) -> Result<()> {
        self.write("\n")
    }
}
