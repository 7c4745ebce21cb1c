pub use config::Config;
pub use content::{load_chapters, parse_content, ChapterGroup};
pub use error::{report_error, Error};
pub use metadata::{parse_metadata, Metadata};
pub use path_spec::{resolve, Discovered, PathSpec, Resolution};

mod config;
mod content;
mod error;
mod metadata;
mod path_spec;
