use std::fmt::Debug;
use std::path::PathBuf;

use anyhow::Result;

pub use buffer::Buffer;
pub use chunk_buffer::ChunkBuffer;
pub use file_set::FileSet;
pub use stdout::StdOut;

mod buffer;
mod chunk_buffer;
mod file_set;
mod stdout;

/// Destination of a [crate::generator::Generator].
///
/// Generators open one [Chunk] per course before writing it, so outputs that care about files
/// can split their data.
pub trait Output: Debug {
    fn write_chunk(&mut self, chunk: &Chunk) -> Result<()>;
    fn write(&mut self, data: &str) -> Result<()>;
    fn newline(&mut self) -> Result<()>;
}

#[derive(Default, Debug, Clone, Eq, PartialEq)]
pub struct Chunk {
    /// Path of the file this chunk belongs in, relative to the root of the [Output].
    pub relative_file_path: Option<PathBuf>,
}

impl Chunk {
    pub fn with_relative_file_path<P: Into<PathBuf>>(relative_file_path: P) -> Self {
        Self {
            relative_file_path: Some(relative_file_path.into()),
        }
    }
}
