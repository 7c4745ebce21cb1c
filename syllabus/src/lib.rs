//! Compiles hand-authored syllabus files into a [model::Course] graph.
//!
//! Each subject has two files: a structured-text metadata file naming the course and its
//! variants, and a JSON content file holding raw chapters together with the path specs used to
//! extract each variant's chapters and topics from them.

pub use executor::Executor;
pub use generator::Generator;
pub use input::Input;
pub use output::Output;
pub use registry::Registry;

mod executor;
pub mod generator;
pub mod input;
pub mod model;
pub mod output;
pub mod parser;
pub mod registry;

#[cfg(test)]
mod test_util;
