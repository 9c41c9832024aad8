use camino::Utf8PathBuf;
use thiserror::Error;

use crate::Span;

/// A tag pushed on the open-tag stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpenTag {
    pub name: String,
    pub span: Span,
}

/// A finding produced while scanning.
///
/// The `Display` form of each variant is the message reported to users.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TagError {
    /// A closing tag appeared while no tag was open.
    #[error("Line {line}: Unexpected closing tag </{tag}>")]
    UnexpectedClosing { line: usize, tag: String, span: Span },

    /// A closing tag did not match the most recently opened tag.
    ///
    /// The opening tag has already been popped when this is reported, so one
    /// misplaced tag usually produces several of these in a row.
    #[error("Line {line}: Mismatched closing tag </{tag}>. Expected closing for <{expected}>")]
    MismatchedClosing {
        line: usize,
        tag: String,
        span: Span,
        expected: String,
        expected_span: Span,
    },

    /// Tags still open when the input ended, in the order they were opened.
    #[error("Unclosed tags at end of file: {}", format_tag_list(.tags))]
    UnclosedAtEof { tags: Vec<OpenTag> },
}

impl TagError {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            TagError::UnexpectedClosing { .. } => "T100",
            TagError::MismatchedClosing { .. } => "T101",
            TagError::UnclosedAtEof { .. } => "T102",
        }
    }

    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            TagError::UnexpectedClosing { .. } => "unexpected_closing",
            TagError::MismatchedClosing { .. } => "mismatched_closing",
            TagError::UnclosedAtEof { .. } => "unclosed_at_eof",
        }
    }

    /// 1-based line of the offending closing tag.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            TagError::UnexpectedClosing { line, .. } | TagError::MismatchedClosing { line, .. } => {
                Some(*line)
            }
            TagError::UnclosedAtEof { .. } => None,
        }
    }

    #[must_use]
    pub fn primary_span(&self) -> Option<Span> {
        match self {
            TagError::UnexpectedClosing { span, .. } | TagError::MismatchedClosing { span, .. } => {
                Some(*span)
            }
            TagError::UnclosedAtEof { tags } => tags.last().map(|tag| tag.span),
        }
    }
}

/// Render names the way a Python list of strings prints: `['div', 'span']`.
fn format_tag_list(tags: &[OpenTag]) -> String {
    let names: Vec<String> = tags.iter().map(|tag| format!("'{}'", tag.name)).collect();
    format!("[{}]", names.join(", "))
}

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to read {path}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}
