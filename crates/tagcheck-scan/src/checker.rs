//! Stack-based tag balance checking.
//!
//! The checker walks the source one line at a time. Comments are stripped,
//! tags are matched with a regular expression, and each opening tag is pushed
//! onto a stack that closing tags pop from.
//!
//! A closing tag that does not match the top of the stack still pops it. The
//! checker never tries to resynchronise, so one misplaced tag can cause a run
//! of mismatches for the rest of the file.

use tracing::debug;
use tracing::trace;

use crate::comments::CleanLine;
use crate::error::OpenTag;
use crate::lines::lines;
use crate::lines::Line;
use crate::tags::find_tags;
use crate::tags::TagKind;
use crate::tags::TagMatch;
use crate::TagError;

/// Elements that never take a closing tag, even without `/>`.
pub const VOID_ELEMENTS: [&str; 4] = ["input", "img", "br", "hr"];

pub struct TagBalanceChecker {
    void_elements: Vec<String>,
    stack: Vec<OpenTag>,
    errors: Vec<TagError>,
}

impl Default for TagBalanceChecker {
    fn default() -> Self {
        Self::with_void_elements(VOID_ELEMENTS)
    }
}

impl TagBalanceChecker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_void_elements<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            void_elements: names.into_iter().map(Into::into).collect(),
            stack: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Scan `source` and return every finding in the order it was produced.
    #[must_use]
    pub fn check(mut self, source: &str) -> Vec<TagError> {
        for line in lines(source) {
            self.check_line(line);
        }

        if !self.stack.is_empty() {
            let tags = std::mem::take(&mut self.stack);
            self.errors.push(TagError::UnclosedAtEof { tags });
        }

        self.errors
    }

    fn check_line(&mut self, line: Line<'_>) {
        let clean = CleanLine::new(line.text());
        for tag in find_tags(&clean, line.offset()) {
            self.handle_tag(line.number(), &tag);
        }
    }

    fn handle_tag(&mut self, line: usize, tag: &TagMatch) {
        match tag.kind() {
            TagKind::SelfClosing => {}
            _ if self.is_void(tag.name()) => {}
            TagKind::Closing => self.handle_closing(line, tag),
            TagKind::Opening => {
                trace!(line, tag = tag.name(), depth = self.stack.len(), "push");
                self.stack.push(OpenTag {
                    name: tag.name().to_string(),
                    span: tag.span(),
                });
            }
        }
    }

    fn handle_closing(&mut self, line: usize, tag: &TagMatch) {
        let Some(open) = self.stack.pop() else {
            debug!(line, tag = tag.name(), "closing tag with nothing open");
            self.errors.push(TagError::UnexpectedClosing {
                line,
                tag: tag.name().to_string(),
                span: tag.span(),
            });
            return;
        };

        trace!(line, tag = tag.name(), open = %open.name, "pop");

        if open.name != tag.name() {
            debug!(line, tag = tag.name(), expected = %open.name, "mismatched closing tag");
            self.errors.push(TagError::MismatchedClosing {
                line,
                tag: tag.name().to_string(),
                span: tag.span(),
                expected: open.name,
                expected_span: open.span,
            });
        }
    }

    fn is_void(&self, name: &str) -> bool {
        self.void_elements.iter().any(|void| void == name)
    }
}
