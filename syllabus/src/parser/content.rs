use std::collections::BTreeMap;

use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value;

use crate::model::{variant_index, Chapter, CourseVariant};
use crate::parser::path_spec::{resolve, Object, PathSpec};
use crate::parser::Error;

/// One entry of the top-level array of a content file.
#[derive(Debug, Clone, Deserialize)]
pub struct ChapterGroup {
    /// Variant name (or id) to the path specs used to extract that variant's chapters.
    pub variant_key: BTreeMap<String, Vec<String>>,
    pub chapters: Vec<Object>,
}

pub fn parse_content(text: &str) -> Result<Vec<ChapterGroup>, Error> {
    Ok(serde_json::from_str(text)?)
}

/// Builds a [Chapter] for every raw chapter and every variant of its group, appending each to
/// its variant in file order.
///
/// Every variant named by the groups is checked before anything is attached, so on error
/// `variants` is left untouched.
pub fn load_chapters(groups: &[ChapterGroup], variants: &mut [CourseVariant]) -> Result<(), Error> {
    check_variants(groups, variants)?;

    for (group_index, group) in groups.iter().enumerate() {
        debug!(
            "group #{}: {} chapters for variants {:?}",
            group_index,
            group.chapters.len(),
            group.variant_key.keys().collect::<Vec<_>>()
        );
        for (index, raw) in group.chapters.iter().enumerate() {
            for (key, path_specs) in &group.variant_key {
                let variant = variant_index(variants, key)
                    .ok_or_else(|| Error::UnknownVariant(key.clone()))?;
                let chapter = build_chapter(raw, index, path_specs);
                variants[variant].chapters.push(chapter);
            }
        }
    }
    Ok(())
}

fn check_variants(groups: &[ChapterGroup], variants: &[CourseVariant]) -> Result<(), Error> {
    let unknown = groups
        .iter()
        .flat_map(|group| group.variant_key.keys())
        .find(|key| variant_index(variants, key).is_none());
    match unknown {
        Some(key) => Err(Error::UnknownVariant(key.clone())),
        None => Ok(()),
    }
}

/// Builds the [Chapter] for the raw chapter at `index` of its group by applying each of
/// `path_specs` in order.
pub fn build_chapter(raw: &Object, index: usize, path_specs: &[String]) -> Chapter {
    let name = match raw.get("name") {
        Some(Value::String(name)) => name.clone(),
        Some(Value::Number(name)) => name.to_string(),
        _ => {
            warn!("chapter #{} has no name", index + 1);
            String::new()
        }
    };
    let mut chapter = Chapter::new(name, chapter_number(raw.get("number"), index));

    for spec in path_specs {
        let resolution = resolve(raw, &PathSpec::parse(spec));
        chapter.description.push_str(&resolution.text);
        for discovered in resolution.discovered {
            match discovered.name {
                Some(name) => chapter.merge_topic(&name, discovered.number, &discovered.text),
                None if !discovered.text.trim().is_empty() => warn!(
                    "unnamed item under '{}' in chapter '{}' will not become a topic",
                    spec, chapter.name
                ),
                None => {}
            }
        }
    }

    chapter.finalize();
    chapter
}

/// Uses the raw chapter number when present, otherwise the 1-based position in the group.
fn chapter_number(value: Option<&Value>, index: usize) -> i64 {
    let fallback = index as i64 + 1;
    match value {
        Some(Value::Number(n)) => n.as_i64().filter(|n| *n != 0).unwrap_or(fallback),
        Some(Value::String(s)) if !s.trim().is_empty() => s.trim().parse().unwrap_or_else(|_| {
            warn!("chapter number '{}' is not an integer, using {}", s, fallback);
            fallback
        }),
        _ => fallback,
    }
}
