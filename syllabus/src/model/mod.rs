pub use chapter::Chapter;
pub use course::Course;
pub use topic::{Topic, TopicNumber};
pub use variant::{variant_index, CourseVariant};

mod chapter;
mod course;
mod topic;
mod variant;
