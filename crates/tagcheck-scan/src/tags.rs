use std::sync::LazyLock;

use regex::Regex;

use crate::classes::is_space;
use crate::classes::SPACE;
use crate::classes::WORD;
use crate::comments::CleanLine;
use crate::Span;

static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("</?[{WORD}.]+([{SPACE}]+[^>]*)?/?>")).expect("tag pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Opening,
    Closing,
    SelfClosing,
}

/// A tag-like substring found on one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagMatch {
    raw: String,
    kind: TagKind,
    name: String,
    span: Span,
}

impl TagMatch {
    /// Classify `raw` and extract its tag name.
    ///
    /// Self-closing wins over closing, so `</div/>` is self-closing.
    #[must_use]
    pub fn new(raw: &str, span: Span) -> Self {
        let is_closing = raw.starts_with("</");
        let kind = if raw.ends_with("/>") {
            TagKind::SelfClosing
        } else if is_closing {
            TagKind::Closing
        } else {
            TagKind::Opening
        };
        let name = if is_closing {
            closing_name(raw)
        } else {
            opening_name(raw)
        };

        Self {
            raw: raw.to_string(),
            kind,
            name,
            span,
        }
    }

    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn kind(&self) -> TagKind {
        self.kind
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Location of the match in the original source, comments included.
    #[must_use]
    pub fn span(&self) -> Span {
        self.span
    }
}

/// `</ div >` and `</div foo>` lose every space and `>`, giving `div` and
/// `divfoo`.
fn closing_name(raw: &str) -> String {
    raw.get(2..)
        .unwrap_or_default()
        .replace(['>', ' '], "")
        .trim_matches(is_space)
        .to_string()
}

fn opening_name(raw: &str) -> String {
    raw.get(1..)
        .unwrap_or_default()
        .split(is_space)
        .find(|word| !word.is_empty())
        .unwrap_or_default()
        .replace(['>', '/'], "")
        .trim_matches(is_space)
        .to_string()
}

/// Find every tag in a cleaned line, left to right.
///
/// `line_offset` is the byte offset of the line within the source and is
/// added to each span.
#[must_use]
pub fn find_tags(line: &CleanLine, line_offset: usize) -> Vec<TagMatch> {
    TAG_PATTERN
        .find_iter(line.as_str())
        .map(|found| {
            let (start, end) = line.original_range(found.start(), found.end());
            let span = Span::from_bounds(start, end).shift(line_offset);
            TagMatch::new(found.as_str(), span)
        })
        .collect()
}
