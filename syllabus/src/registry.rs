use std::collections::BTreeSet;

use log::{debug, info};

use crate::input::{ContentKind, Input};
use crate::model::Course;
use crate::parser::{self, load_chapters, parse_content, parse_metadata, Error};

/// Builds [Course]s from the subjects an [Input] provides.
///
/// Each call to [Registry::load_course] builds an independent [Course]; nothing is cached or
/// shared between builds.
pub struct Registry<'a, I: Input + ?Sized> {
    input: &'a I,
    config: parser::Config,
}

impl<'a, I: Input + ?Sized> Registry<'a, I> {
    pub fn new(input: &'a I) -> Self {
        Self::with_config(input, parser::Config::default())
    }

    pub fn with_config(input: &'a I, config: parser::Config) -> Self {
        Self { input, config }
    }

    /// Every subject id that can be passed to [Registry::load_course].
    pub fn course_ids(&self) -> BTreeSet<String> {
        self.input.subject_ids()
    }

    /// Parses the metadata file, then assembles the chapters of the content file into the
    /// variants it declared.
    pub fn load_course(&self, id: &str) -> Result<Course, Error> {
        if !self.course_ids().contains(id) {
            return Err(Error::UnsupportedSubject(id.to_string()));
        }
        let metadata = self.file(id, ContentKind::Metadata)?;
        let content = self.file(id, ContentKind::Content)?;

        info!("Building course '{}'...", id);
        let metadata = parse_metadata(metadata)?;
        let groups = parse_content(content)?;
        let mut variants = metadata.variants;
        load_chapters(&groups, &mut variants)?;

        for variant in &variants {
            debug!(
                "variant '{}' of '{}' has {} chapters",
                variant.name,
                id,
                variant.chapters.len()
            );
        }

        Ok(Course {
            id: id.to_string(),
            name: metadata.course_name,
            has_topics: self.config.has_topics(id),
            variants,
        })
    }

    fn file(&self, id: &str, kind: ContentKind) -> Result<&'a str, Error> {
        self.input
            .data(id, kind)
            .ok_or_else(|| Error::MissingContentFile {
                subject_id: id.to_string(),
                kind,
            })
    }
}
