use log::debug;
use serde::Serialize;

use crate::model::{Topic, TopicNumber};

/// One chapter of a [crate::model::CourseVariant].
///
/// The same raw chapter from a content file can produce several [Chapter]s, one for each variant
/// that lists it, because each variant extracts its own set of fields.
#[derive(Debug, Default, Clone, Eq, PartialEq, Serialize)]
pub struct Chapter {
    pub name: String,
    pub number: i64,
    pub description: String,
    pub topics: Vec<Topic>,
}

impl Chapter {
    pub fn new(name: impl ToString, number: i64) -> Self {
        Self {
            name: name.to_string(),
            number,
            ..Default::default()
        }
    }

    pub fn topic(&self, name: &str) -> Option<&Topic> {
        self.topics.iter().find(|topic| topic.name == name)
    }

    /// Adds a new [Topic] named `name`, or appends `description` to the existing [Topic] of the
    /// same name. Repeated names accumulate in the order they are merged.
    pub fn merge_topic(&mut self, name: &str, number: Option<TopicNumber>, description: &str) {
        let Self {
            name: chapter_name,
            topics,
            ..
        } = self;
        match topics.iter_mut().find(|topic| topic.name == name) {
            Some(topic) => {
                debug!("merging repeated topic '{}' in chapter '{}'", name, chapter_name);
                topic.merge_description(description);
            }
            None => topics.push(Topic::new(name, number, description)),
        }
    }

    /// Trims the chapter and topic descriptions and drops every topic left without one.
    pub fn finalize(&mut self) {
        self.description = self.description.trim().to_string();
        for topic in &mut self.topics {
            topic.description = topic.description.trim().to_string();
        }
        let chapter_name = &self.name;
        self.topics.retain(|topic| {
            if topic.is_blank() {
                debug!(
                    "dropping topic '{}' in chapter '{}': empty description",
                    topic.name, chapter_name
                );
            }
            !topic.is_blank()
        });
    }
}

#[cfg(test)]
mod tests {
    mod merge_topic {
        use crate::model::{Chapter, TopicNumber};

        #[test]
        fn new_name_adds_topic() {
            let mut chapter = Chapter::new("Numbers", 1);
            chapter.merge_topic("Integers", Some(TopicNumber::from(1)), "a");
            chapter.merge_topic("Fractions", None, "b");
            assert_eq!(chapter.topics.len(), 2);
            assert_eq!(chapter.topic("Fractions").unwrap().description, "b");
        }

        #[test]
        fn repeated_name_appends() {
            let mut chapter = Chapter::new("Numbers", 1);
            chapter.merge_topic("Integers", None, "a");
            chapter.merge_topic("Integers", None, "b");
            assert_eq!(chapter.topics.len(), 1);
            assert_eq!(chapter.topic("Integers").unwrap().description, "a\n\nb");
        }
    }

    mod finalize {
        use crate::model::Chapter;

        #[test]
        fn trims_description() {
            let mut chapter = Chapter::new("Numbers", 1);
            chapter.description = "\n\n**description**:\n\ntext\n\n".to_string();
            chapter.finalize();
            assert_eq!(chapter.description, "**description**:\n\ntext");
        }

        #[test]
        fn finalize_is_idempotent() {
            let mut chapter = Chapter::new("Numbers", 1);
            chapter.description = "\n  text \n".to_string();
            chapter.merge_topic("a", None, "\n\nx\n");
            chapter.finalize();
            let once = chapter.clone();
            chapter.finalize();
            assert_eq!(chapter, once);
        }

        #[test]
        fn drops_blank_topics() {
            let mut chapter = Chapter::new("Numbers", 1);
            chapter.merge_topic("kept", None, "\n\ntext");
            chapter.merge_topic("blank", None, "");
            chapter.merge_topic("whitespace", None, " \n ");
            chapter.finalize();
            assert_eq!(chapter.topics.len(), 1);
            assert_eq!(chapter.topic("kept").unwrap().description, "text");
        }

        #[test]
        fn blank_topic_merged_twice_is_dropped() {
            let mut chapter = Chapter::new("Numbers", 1);
            chapter.merge_topic("blank", None, "");
            chapter.merge_topic("blank", None, "");
            chapter.finalize();
            assert!(chapter.topics.is_empty());
        }
    }
}
