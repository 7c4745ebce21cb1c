use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "syllabus", author, version, about)]
pub struct Config {
    /// Directory holding a `<subject>.md` metadata file and a `<subject>.json` content file for
    /// each subject.
    #[arg(short, long, value_name = "DIR")]
    pub content_dir: PathBuf,

    /// Subject ids to build. Builds every subject in --content-dir if omitted.
    #[arg(short, long, value_name = "ID")]
    pub subject: Vec<String>,

    /// Path to a [syllabus::parser::Config] in json format.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Name of generators to use.
    #[arg(short, long, required_unless_present("list"))]
    pub generator: Vec<GeneratorName>,

    /// Each generator writes to its own directory under this path, named after the generator.
    /// The directories must be empty or nonexistent.
    #[arg(long, default_value = ".")]
    pub output_root: PathBuf,

    /// Write generated output to stdout instead of --output-root.
    #[arg(long)]
    pub stdout: bool,

    /// Print the subject ids found in --content-dir and exit.
    #[arg(long)]
    pub list: bool,
}

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum GeneratorName {
    /// Readable course text.
    Markdown,
    /// Storage rows as JSON.
    Rows,
    /// Rust debug dump of the built course.
    Dbg,
}

impl GeneratorName {
    pub fn create_impl(&self) -> Box<dyn syllabus::Generator> {
        match self {
            GeneratorName::Markdown => Box::new(syllabus::generator::Markdown::default()),
            GeneratorName::Rows => Box::new(syllabus::generator::Rows::default()),
            GeneratorName::Dbg => Box::new(syllabus::generator::Dbg::default()),
        }
    }
}
