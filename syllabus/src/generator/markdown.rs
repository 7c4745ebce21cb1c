use anyhow::Result;

use crate::generator::Generator;
use crate::model::{Chapter, Course, CourseVariant, Topic};
use crate::output::{Chunk, Output};

/// Renders a course as readable text: the course heading, each variant with its description,
/// then every chapter and, for courses with topics, every topic.
#[derive(Debug, Default)]
pub struct Markdown {}

impl Generator for Markdown {
    fn generate(&mut self, course: &Course, output: &mut dyn Output) -> Result<()> {
        let o = output;
        let mut header = Header::new();

        o.write_chunk(&Chunk::with_relative_file_path(format!("{}.md", course.id)))?;
        header.write(&course.name, o)?;
        o.newline()?;

        header.smaller();
        for variant in &course.variants {
            write_variant(variant, course.has_topics, o, &mut header)?;
        }
        header.bigger();

        Ok(())
    }
}

static MAX_PREFIX: &str = "###### "; // The space is load-bearing.
/// Track the current header depth (H1-H6).
struct Header {
    depth: u8,
}
impl Header {
    pub fn new() -> Self {
        Self { depth: 1 }
    }

    pub fn write(&self, title: &str, o: &mut dyn Output) -> Result<()> {
        o.write(self.prefix())?;
        o.write(title)?;
        o.newline()?;
        Ok(())
    }

    pub fn prefix(&self) -> &'static str {
        let max = MAX_PREFIX.len();
        let depth = self.depth as usize;
        let start = max - depth - 1;
        &MAX_PREFIX[start..]
    }

    pub fn bigger(&mut self) {
        self.depth = std::cmp::max(self.depth - 1, 1);
    }

    pub fn smaller(&mut self) {
        self.depth = std::cmp::min(self.depth + 1, (MAX_PREFIX.len() - 1) as u8);
    }
}

fn write_variant(
    variant: &CourseVariant,
    has_topics: bool,
    o: &mut dyn Output,
    header: &mut Header,
) -> Result<()> {
    header.write(&format!("{} == {}", variant.name, variant.id), o)?;
    write_paragraph(variant.description.trim_end(), o)?;
    o.newline()?;

    header.smaller();
    for chapter in &variant.chapters {
        write_chapter(chapter, has_topics, o, header)?;
    }
    header.bigger();
    Ok(())
}

fn write_chapter(
    chapter: &Chapter,
    has_topics: bool,
    o: &mut dyn Output,
    header: &mut Header,
) -> Result<()> {
    header.write(&format!("{}. {}", chapter.number, chapter.name), o)?;
    o.newline()?;
    if !chapter.description.is_empty() {
        write_paragraph(&chapter.description, o)?;
        o.newline()?;
    }

    // Flat courses are rendered from the chapter description alone.
    if has_topics {
        header.smaller();
        for topic in &chapter.topics {
            write_topic(topic, o, header)?;
        }
        header.bigger();
    }
    Ok(())
}

fn write_topic(topic: &Topic, o: &mut dyn Output, header: &mut Header) -> Result<()> {
    let title = match &topic.number {
        Some(number) => format!("{} {}", number, topic.name),
        None => topic.name.clone(),
    };
    header.write(&title, o)?;
    o.newline()?;
    write_paragraph(&topic.description, o)?;
    o.newline()
}

fn write_paragraph(text: &str, o: &mut dyn Output) -> Result<()> {
    if text.is_empty() {
        return Ok(());
    }
    o.write(text)?;
    o.newline()
}
