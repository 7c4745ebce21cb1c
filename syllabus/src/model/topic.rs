use std::fmt::{Display, Formatter};

use serde::Serialize;

/// Separator placed between descriptions when the same [Topic] is reached more than once.
pub const MERGE_SEPARATOR: &str = "\n\n";

/// A single named topic of a [crate::model::Chapter].
///
/// A [Topic] is identified by its `name` within its chapter.
#[derive(Debug, Default, Clone, Eq, PartialEq, Serialize)]
pub struct Topic {
    pub name: String,
    pub number: Option<TopicNumber>,
    pub description: String,
}

/// Topic numbers are copied verbatim from the content file and may be integers ("3") or
/// dotted strings ("3.2").
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TopicNumber {
    Int(i64),
    Text(String),
}

impl Topic {
    pub fn new(
        name: impl ToString,
        number: Option<TopicNumber>,
        description: impl ToString,
    ) -> Self {
        Self {
            name: name.to_string(),
            number,
            description: description.to_string(),
        }
    }

    /// Appends `text` to the description after a blank line. The number of the topic is never
    /// changed by a merge.
    pub fn merge_description(&mut self, text: &str) {
        self.description.push_str(MERGE_SEPARATOR);
        self.description.push_str(text);
    }

    /// True if the description holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.description.trim().is_empty()
    }
}

impl Display for TopicNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TopicNumber::Int(value) => write!(f, "{}", value),
            TopicNumber::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for TopicNumber {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for TopicNumber {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{Topic, TopicNumber};

    #[test]
    fn merge_adds_blank_line() {
        let mut topic = Topic::new("Integers", None, "first");
        topic.merge_description("second");
        assert_eq!(topic.description, "first\n\nsecond");
    }

    #[test]
    fn merge_keeps_number() {
        let mut topic = Topic::new("Integers", Some(TopicNumber::from(2)), "a");
        topic.merge_description("b");
        assert_eq!(topic.number, Some(TopicNumber::Int(2)));
    }

    #[test]
    fn blank() {
        assert!(Topic::new("a", None, " \n\n  ").is_blank());
        assert!(!Topic::new("a", None, "\n\nx").is_blank());
    }

    #[test]
    fn number_display() {
        assert_eq!(TopicNumber::from(3).to_string(), "3");
        assert_eq!(TopicNumber::from("3.2").to_string(), "3.2");
    }
}
