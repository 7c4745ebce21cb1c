use std::path::PathBuf;

use anyhow::Result;
use syllabus::{generator, input, output, Executor};

fn main() -> Result<()> {
    env_logger::init();
    let content_dir = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR")?).join("examples/content");
    Executor::new(input::Dir::new(content_dir)?)
        .generator(generator::Markdown::default())
        .output(output::StdOut::default())
        .execute()
}
