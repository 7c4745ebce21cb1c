use anyhow::Result;
use serde::Serialize;

use crate::generator::Generator;
use crate::model::{Course, CourseVariant, TopicNumber};
use crate::output::{Chunk, Output};

/// Every topic row carries the same weight when computing progress.
pub const TOPIC_WEIGHT: u32 = 1;

/// A [Course] flattened into the rows a storage layer persists.
#[derive(Debug, Default, Clone, Eq, PartialEq, Serialize)]
pub struct CourseRows {
    pub course: CourseRow,
    pub variants: Vec<VariantRow>,
    pub topics: Vec<TopicRow>,
}

#[derive(Debug, Default, Clone, Eq, PartialEq, Serialize)]
pub struct CourseRow {
    pub course_id: String,
    pub course_name: String,
}

#[derive(Debug, Default, Clone, Eq, PartialEq, Serialize)]
pub struct VariantRow {
    pub variant_id: String,
    pub course_id: String,
    pub variant_name: String,
    pub variant_description: String,
}

#[derive(Debug, Default, Clone, Eq, PartialEq, Serialize)]
pub struct TopicRow {
    /// `chapter_<n>`, counted from 1 within each variant.
    pub topic_id: String,
    pub variant_id: String,
    pub chapter_name: String,
    pub topic_name: String,
    pub topic_number: Option<TopicNumber>,
    pub description: String,
    pub weight: u32,
}

/// Flattens `course` into rows.
///
/// Courses with topics get one [TopicRow] per topic. Courses without get one per chapter,
/// named after and described by the chapter itself.
pub fn flatten(course: &Course) -> CourseRows {
    CourseRows {
        course: CourseRow {
            course_id: course.id.clone(),
            course_name: course.name.clone(),
        },
        variants: course
            .variants
            .iter()
            .map(|variant| VariantRow {
                variant_id: variant.id.clone(),
                course_id: course.id.clone(),
                variant_name: variant.name.clone(),
                variant_description: variant.description.clone(),
            })
            .collect(),
        topics: course
            .variants
            .iter()
            .flat_map(|variant| topic_rows(variant, course.has_topics))
            .collect(),
    }
}

fn topic_rows(variant: &CourseVariant, has_topics: bool) -> Vec<TopicRow> {
    let mut rows = vec![];
    for chapter in &variant.chapters {
        if has_topics {
            for topic in &chapter.topics {
                rows.push(TopicRow {
                    variant_id: variant.id.clone(),
                    chapter_name: chapter.name.clone(),
                    topic_name: topic.name.clone(),
                    topic_number: topic.number.clone(),
                    description: topic.description.clone(),
                    ..Default::default()
                });
            }
        } else {
            rows.push(TopicRow {
                variant_id: variant.id.clone(),
                chapter_name: chapter.name.clone(),
                topic_name: chapter.name.clone(),
                topic_number: Some(TopicNumber::Int(chapter.number)),
                description: chapter.description.clone(),
                ..Default::default()
            });
        }
    }
    for (i, row) in rows.iter_mut().enumerate() {
        row.topic_id = format!("chapter_{}", i + 1);
        row.weight = TOPIC_WEIGHT;
    }
    rows
}

/// Writes [CourseRows] as pretty-printed JSON.
#[derive(Debug, Default)]
pub struct Rows {}

impl Generator for Rows {
    fn generate(&mut self, course: &Course, output: &mut dyn Output) -> Result<()> {
        output.write_chunk(&Chunk::with_relative_file_path(format!("{}.json", course.id)))?;
        output.write(&serde_json::to_string_pretty(&flatten(course))?)?;
        output.newline()
    }
}
