use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::Result;
use syllabus::{generator, input, output, Executor};

fn main() -> Result<()> {
    env_logger::init();
    let content_dir = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR")?).join("examples/content");
    let output_root = tempfile::tempdir()?;
    let output = Rc::new(RefCell::new(output::FileSet::new(output_root.path())?));

    Executor::new(input::Dir::new(content_dir)?)
        .generator(generator::Rows::default())
        .output_ptr(output.clone())
        .execute()?;

    for path in output.borrow().written() {
        let rows = std::fs::read_to_string(output_root.path().join(path))?;
        println!("{}:\n{}", path.display(), rows);
    }
    Ok(())
}
