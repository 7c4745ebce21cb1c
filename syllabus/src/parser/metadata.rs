use chumsky::prelude::*;
use log::{debug, warn};

use crate::model::CourseVariant;
use crate::parser::Error;

/// Contents of a metadata file: the course name and its variants in declaration order.
#[derive(Debug, Default, Eq, PartialEq)]
pub struct Metadata {
    pub course_name: String,
    pub variants: Vec<CourseVariant>,
}

/// A variant header whose description lines are still being collected.
struct OpenVariant<'a> {
    name: &'a str,
    id: &'a str,
    lines: Vec<&'a str>,
}

/// Parses a metadata file of the form
///
/// ```text
/// # <course name>
/// ## <variant name> == <variant id>
/// free text describing the variant
/// ## <variant name> == <variant id>
/// ...
/// ```
///
/// Lines between the course heading and the first variant header are ignored.
pub fn parse_metadata(text: &str) -> Result<Metadata, Error> {
    let mut course_name: Option<String> = None;
    let mut metadata = Metadata::default();
    let mut open: Option<OpenVariant> = None;
    let mut preamble = 0;

    for (i, line) in text.lines().enumerate() {
        let line_number = i + 1;
        let trimmed = line.trim();
        if trimmed.starts_with("##") {
            if course_name.is_none() {
                return Err(Error::MissingCourseName { line: line_number });
            }
            if let Some(variant) = open.take() {
                commit(&mut metadata.variants, variant);
            }
            let header = trimmed.trim_start_matches('#');
            let (name, id) =
                split_variant_header(header).ok_or_else(|| Error::MalformedVariantHeader {
                    line: line_number,
                    header: trimmed.to_string(),
                })?;
            open = Some(OpenVariant {
                name,
                id,
                lines: vec![],
            });
        } else if trimmed.starts_with('#') {
            let name = trimmed.trim_start_matches('#').trim();
            if let Some(previous) = &course_name {
                warn!(
                    "course name '{}' replaced by '{}' at line {}",
                    previous, name, line_number
                );
            }
            course_name = Some(name.to_string());
        } else {
            match &mut open {
                Some(variant) => variant.lines.push(line.trim_end()),
                None => preamble += 1,
            }
        }
    }

    if let Some(variant) = open.take() {
        commit(&mut metadata.variants, variant);
    }
    if preamble > 0 {
        debug!("ignored {} lines outside of any variant", preamble);
    }

    metadata.course_name = course_name.ok_or(Error::MissingCourseName {
        line: text.lines().count().max(1),
    })?;
    Ok(metadata)
}

fn commit(variants: &mut Vec<CourseVariant>, open: OpenVariant) {
    let variant = CourseVariant::new(open.name, open.id, open.lines.join("\n"));
    debug!("declared variant '{}' ({})", variant.name, variant.id);
    match variants.iter_mut().find(|v| v.name == variant.name) {
        Some(existing) => {
            warn!("variant '{}' declared more than once", variant.name);
            *existing = variant;
        }
        None => variants.push(variant),
    }
}

/// Splits `<name> == <id>` into its trimmed parts. Anything after a second `==` is ignored.
fn split_variant_header(header: &str) -> Option<(&str, &str)> {
    let segment = || {
        any::<&str, extra::Err<Cheap>>()
            .and_is(just("==").not())
            .repeated()
            .slice()
    };
    let parser = segment()
        .then_ignore(just("=="))
        .then(segment())
        .then_ignore(any().repeated())
        .then_ignore(end());
    parser
        .parse(header)
        .into_output()
        .map(|(name, id)| (name.trim(), id.trim()))
}
