//! Naive comment removal applied to each line before tags are matched.
//!
//! Two patterns are recognised:
//!
//! - JSX block comments written on a single line, `{/* ... */}`. A comment
//!   spanning several lines is left untouched and its contents are scanned.
//! - Everything after the first `//`, wherever it appears. This also cuts
//!   URLs and string literals that happen to contain `//`.

use std::sync::LazyLock;

use regex::Regex;

use crate::classes::SPACE;

static JSX_BLOCK_COMMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\{{[{SPACE}]*/\*.*?\*/[{SPACE}]*\}}"))
        .expect("JSX comment pattern is valid")
});

const LINE_COMMENT: &str = "//";

/// A line with comments removed.
///
/// Keeps enough bookkeeping to translate offsets in the cleaned text back to
/// offsets in the original line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanLine {
    text: String,
    segments: Vec<Segment>,
}

/// A run of text copied verbatim from the original line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Segment {
    clean: usize,
    original: usize,
}

impl CleanLine {
    #[must_use]
    pub fn new(line: &str) -> Self {
        let mut text = String::with_capacity(line.len());
        let mut segments = Vec::new();
        let mut last_end = 0;

        for comment in JSX_BLOCK_COMMENT.find_iter(line) {
            segments.push(Segment {
                clean: text.len(),
                original: last_end,
            });
            text.push_str(&line[last_end..comment.start()]);
            last_end = comment.end();
        }

        segments.push(Segment {
            clean: text.len(),
            original: last_end,
        });
        text.push_str(&line[last_end..]);

        if let Some(cut) = text.find(LINE_COMMENT) {
            text.truncate(cut);
        }

        Self { text, segments }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Map a byte offset in the cleaned text to the original line.
    #[must_use]
    pub fn original_offset(&self, clean: usize) -> usize {
        let index = self
            .segments
            .partition_point(|segment| segment.clean <= clean)
            .saturating_sub(1);
        let segment = self.segments[index];
        segment.original + (clean - segment.clean)
    }

    /// Map a half-open byte range in the cleaned text to the original line.
    ///
    /// A range that straddles a removed comment expands to cover it.
    #[must_use]
    pub fn original_range(&self, start: usize, end: usize) -> (usize, usize) {
        let original_start = self.original_offset(start);
        if end <= start {
            return (original_start, original_start);
        }
        (original_start, self.original_offset(end - 1) + 1)
    }
}
