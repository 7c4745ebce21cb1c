use std::fmt::Debug;

use anyhow::Result;

pub use dbg::Dbg;
pub use markdown::Markdown;
pub use rows::{flatten, CourseRow, CourseRows, Rows, TopicRow, VariantRow, TOPIC_WEIGHT};

use crate::model::Course;
use crate::output::Output;

mod dbg;
mod markdown;
mod rows;

/// Consumes a built [Course], writing one chunk for it to `output`.
pub trait Generator: Debug {
    fn generate(&mut self, course: &Course, output: &mut dyn Output) -> Result<()>;
}

impl<G: Generator + ?Sized> Generator for Box<G> {
    fn generate(&mut self, course: &Course, output: &mut dyn Output) -> Result<()> {
        (**self).generate(course, output)
    }
}
