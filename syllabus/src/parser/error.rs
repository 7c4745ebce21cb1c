use ariadne::{Color, Label, Report, ReportKind, Source};
use log::error;
use thiserror::Error;

use crate::input::{ContentKind, Input};

/// Every way building a [crate::model::Course] can fail. None of these are recovered from; the
/// build of the subject is abandoned.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unsupported subject '{0}'. No content files exist for it.")]
    UnsupportedSubject(String),

    #[error("Missing {kind} file for subject '{subject_id}'.")]
    MissingContentFile {
        subject_id: String,
        kind: ContentKind,
    },

    #[error(
        "Missing course name at line {line}. A '# <course name>' heading must come before any variant."
    )]
    MissingCourseName { line: usize },

    #[error("Invalid variant header at line {line}: '{header}'. Expected '## <name> == <id>'.")]
    MalformedVariantHeader { line: usize, header: String },

    #[error("Unknown variant '{0}' in 'variant_key'. Variants must be declared in the metadata file.")]
    UnknownVariant(String),

    #[error("Malformed content file: {0}")]
    MalformedJson(#[from] serde_json::Error),
}

impl Error {
    /// The file, 1-based line and 1-based column that the error points at, if any.
    pub fn location(&self) -> Option<(ContentKind, usize, usize)> {
        match self {
            Error::MissingCourseName { line } | Error::MalformedVariantHeader { line, .. } => {
                Some((ContentKind::Metadata, *line, 1))
            }
            Error::MalformedJson(err) if err.line() > 0 => {
                Some((ContentKind::Content, err.line(), err.column()))
            }
            _ => None,
        }
    }
}

/// Prints a source report for `error` to stderr when it points into one of the subject's files.
pub fn report_error<I: Input + ?Sized>(subject_id: &str, input: &I, error: &Error) {
    let (kind, line, column) = match error.location() {
        Some(location) => location,
        None => return,
    };
    let src = match input.data(subject_id, kind) {
        Some(src) => src,
        None => return,
    };
    let offset = match report_offset(src, line, column) {
        Some(offset) => offset,
        None => {
            error!("{} ({} file of '{}' is empty)", error, kind, subject_id);
            return;
        }
    };
    let filename = kind.file_name(subject_id);
    let result = Report::build(ReportKind::Error, filename.clone(), offset)
        .with_message(error.to_string())
        .with_label(
            Label::new((filename.clone(), offset..offset + 1))
                .with_message(format!("in subject '{}'", subject_id))
                .with_color(Color::Red),
        )
        .finish()
        .eprint((filename, Source::from(src)));
    if let Err(err) = result {
        error!("failed to print error report: {}", err);
    }
}

/// The char offset to underline, kept inside `src`. `None` when there is nothing to point at.
fn report_offset(src: &str, line: usize, column: usize) -> Option<usize> {
    let len = src.chars().count();
    if len == 0 {
        return None;
    }
    Some(char_offset(src, line, column).min(len - 1))
}

fn char_offset(src: &str, line: usize, column: usize) -> usize {
    let line_start = src
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(|l| l.chars().count())
        .sum::<usize>();
    line_start + column.saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use crate::input::{self, ContentKind};
    use crate::parser::error::{char_offset, report_offset};
    use crate::parser::{parse_content, parse_metadata, report_error, Error};

    #[test]
    fn offset_of_line_start() {
        assert_eq!(char_offset("ab\ncd\nef", 1, 1), 0);
        assert_eq!(char_offset("ab\ncd\nef", 3, 1), 6);
        assert_eq!(char_offset("ab\ncd\nef", 2, 2), 4);
    }

    #[test]
    fn metadata_errors_point_at_metadata() {
        let error = Error::MissingCourseName { line: 4 };
        assert_eq!(error.location(), Some((ContentKind::Metadata, 4, 1)));
    }

    #[test]
    fn json_errors_point_at_content() {
        let json_error = serde_json::from_str::<serde_json::Value>("[\n  {,").unwrap_err();
        let error = Error::from(json_error);
        assert!(matches!(
            error.location(),
            Some((ContentKind::Content, 2, _))
        ));
    }

    #[test]
    fn unknown_variant_has_no_location() {
        assert_eq!(Error::UnknownVariant("x".to_string()).location(), None);
    }

    #[test]
    fn offset_stays_inside_source() {
        assert_eq!(report_offset("", 1, 1), None);
        assert_eq!(report_offset("ab\n", 2, 0), Some(2));
        assert_eq!(report_offset("ab", 7, 3), Some(1));
        assert_eq!(report_offset("ab\ncd", 2, 1), Some(3));
    }

    #[test]
    fn report_for_empty_metadata() {
        let input = input::Buffer::new()
            .with_metadata("x", "")
            .with_content("x", "[]");
        let error = parse_metadata("").unwrap_err();
        assert_eq!(error.location(), Some((ContentKind::Metadata, 1, 1)));
        report_error("x", &input, &error);
    }

    #[test]
    fn report_for_json_ending_early() {
        let input = input::Buffer::new()
            .with_metadata("x", "# X")
            .with_content("x", "[\n");
        let error = parse_content("[\n").unwrap_err();
        assert_eq!(error.location(), Some((ContentKind::Content, 2, 0)));
        report_error("x", &input, &error);
    }

    #[test]
    fn report_for_empty_content() {
        let input = input::Buffer::new()
            .with_metadata("x", "# X")
            .with_content("x", "");
        let error = parse_content("").unwrap_err();
        assert_eq!(error.location(), Some((ContentKind::Content, 1, 0)));
        report_error("x", &input, &error);
    }
}
