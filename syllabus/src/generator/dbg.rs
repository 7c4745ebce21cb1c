use anyhow::Result;

use crate::generator::Generator;
use crate::model::Course;
use crate::output::{Chunk, Output};

/// A generator that writes out the course in the rust [std::fmt::Debug] format.
/// Note that this format is pretty verbose.
#[derive(Debug, Default)]
pub struct Dbg {}

impl Generator for Dbg {
    fn generate(&mut self, course: &Course, output: &mut dyn Output) -> Result<()> {
        output.write_chunk(&Chunk::with_relative_file_path(format!("{}.txt", course.id)))?;
        output.write(&format!("{:#?}\n", course))
    }
}
