use std::fmt::Write as _;

use serde::Serialize;
use tagcheck_scan::TagError;

use crate::render::Diagnostic;
use crate::render::DiagnosticRenderer;

const NO_ERRORS: &str = "No obvious tag nesting errors found.";
const FOUND_ERRORS: &str = "Found errors:";

/// Findings for one input, with the cap on how many are printed.
///
/// The full list is always kept so summaries can report the total.
pub struct Report<'a> {
    path: &'a str,
    source: &'a str,
    errors: &'a [TagError],
    limit: Option<usize>,
}

impl<'a> Report<'a> {
    #[must_use]
    pub fn new(
        path: &'a str,
        source: &'a str,
        errors: &'a [TagError],
        limit: Option<usize>,
    ) -> Self {
        Self {
            path,
            source,
            errors,
            limit,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn reported(&self) -> &'a [TagError] {
        match self.limit {
            Some(limit) => &self.errors[..limit.min(self.errors.len())],
            None => self.errors,
        }
    }

    #[must_use]
    pub fn render_text(&self) -> String {
        if self.errors.is_empty() {
            return format!("{NO_ERRORS}\n");
        }

        let mut out = format!("{FOUND_ERRORS}\n");
        for error in self.reported() {
            let _ = writeln!(out, "{error}");
        }
        out
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        let report = JsonReport {
            path: self.path,
            total: self.total(),
            reported: self.reported().len(),
            errors: self.reported().iter().map(JsonError::from).collect(),
        };
        serde_json::to_string_pretty(&report)
    }

    #[must_use]
    pub fn render_pretty(&self, renderer: &DiagnosticRenderer) -> String {
        if self.errors.is_empty() {
            return format!("{NO_ERRORS}\n");
        }

        let mut out = String::new();
        for error in self.reported() {
            let diagnostic = self.diagnostic(error);
            let _ = writeln!(out, "{}\n", renderer.render(&diagnostic));
        }
        out
    }

    /// Summary line for the end of a pretty report.
    #[must_use]
    pub fn summary(&self) -> String {
        let total = self.total();
        let word = if total == 1 { "error" } else { "errors" };
        let shown = self.reported().len();
        if shown < total {
            format!("Found {total} {word} ({shown} shown).")
        } else {
            format!("Found {total} {word}.")
        }
    }

    fn diagnostic(&self, error: &TagError) -> Diagnostic<'a> {
        let diagnostic = Diagnostic::new(self.source, self.path, error.code(), error.to_string());

        match error {
            TagError::UnexpectedClosing { tag, span, .. } => {
                diagnostic.annotation(*span, format!("no open tag to close with </{tag}>"), true)
            }
            TagError::MismatchedClosing {
                span,
                expected,
                expected_span,
                ..
            } => diagnostic
                .annotation(*span, format!("expected </{expected}>"), true)
                .annotation(*expected_span, format!("<{expected}> opened here"), false)
                .note("later closing tags are matched against the remaining open tags"),
            TagError::UnclosedAtEof { tags } => tags.iter().fold(diagnostic, |diagnostic, tag| {
                diagnostic.annotation(tag.span, format!("<{}> is never closed", tag.name), true)
            }),
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    path: &'a str,
    total: usize,
    reported: usize,
    errors: Vec<JsonError<'a>>,
}

#[derive(Serialize)]
struct JsonError<'a> {
    code: &'static str,
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tag: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expected: Option<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    open_tags: Vec<&'a str>,
    message: String,
}

impl<'a> From<&'a TagError> for JsonError<'a> {
    fn from(error: &'a TagError) -> Self {
        let (tag, expected, open_tags) = match error {
            TagError::UnexpectedClosing { tag, .. } => (Some(tag.as_str()), None, Vec::new()),
            TagError::MismatchedClosing { tag, expected, .. } => {
                (Some(tag.as_str()), Some(expected.as_str()), Vec::new())
            }
            TagError::UnclosedAtEof { tags } => (
                None,
                None,
                tags.iter().map(|tag| tag.name.as_str()).collect(),
            ),
        };

        Self {
            code: error.code(),
            kind: error.kind(),
            line: error.line(),
            tag,
            expected,
            open_tags,
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use tagcheck_scan::check_source;

    use super::*;

    #[test]
    fn text_no_errors() {
        let errors = check_source("<div></div>");
        let report = Report::new("a.jsx", "<div></div>", &errors, Some(20));
        insta::assert_snapshot!(report.render_text().trim_end(), @"No obvious tag nesting errors found.");
    }

    #[test]
    fn text_with_errors() {
        let source = "<div><span></div></span>\n</p>\n<ul>";
        let errors = check_source(source);
        let report = Report::new("a.jsx", source, &errors, Some(20));
        insta::assert_snapshot!(report.render_text().trim_end(), @r"
        Found errors:
        Line 1: Mismatched closing tag </div>. Expected closing for <span>
        Line 1: Mismatched closing tag </span>. Expected closing for <div>
        Line 2: Unexpected closing tag </p>
        Unclosed tags at end of file: ['ul']
        ");
    }

    #[test]
    fn text_is_capped_at_limit() {
        let source = "</x>\n".repeat(30);
        let errors = check_source(&source);
        let report = Report::new("a.jsx", &source, &errors, Some(20));

        let text = report.render_text();
        assert_eq!(text.lines().count(), 21);
        assert!(text.ends_with("Line 20: Unexpected closing tag </x>\n"));
        assert_eq!(report.total(), 30);
        assert_eq!(report.summary(), "Found 30 errors (20 shown).");
    }

    #[test]
    fn no_limit_reports_everything() {
        let source = "</x>\n".repeat(30);
        let errors = check_source(&source);
        let report = Report::new("a.jsx", &source, &errors, None);
        assert_eq!(report.reported().len(), 30);
        assert_eq!(report.summary(), "Found 30 errors.");
    }

    #[test]
    fn json_fields() {
        let source = "<div>\n</span>\n<p>";
        let errors = check_source(source);
        let report = Report::new("src/App.jsx", source, &errors, Some(20));

        let json = report.render_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["path"], "src/App.jsx");
        assert_eq!(value["total"], 2);
        assert_eq!(value["errors"][0]["kind"], "mismatched_closing");
        assert_eq!(value["errors"][0]["line"], 2);
        assert_eq!(value["errors"][0]["tag"], "span");
        assert_eq!(value["errors"][0]["expected"], "div");
        assert_eq!(value["errors"][1]["code"], "T102");
        assert_eq!(value["errors"][1]["open_tags"][0], "p");
        assert!(value["errors"][1].get("line").is_none());
        assert_eq!(
            value["errors"][1]["message"],
            "Unclosed tags at end of file: ['p']"
        );
    }

    #[test]
    fn pretty_annotates_both_tags() {
        let source = "<div>\n  <span></div>\n";
        let errors = check_source(source);
        let report = Report::new("src/App.jsx", source, &errors, None);

        let output = report.render_pretty(&DiagnosticRenderer::plain());
        assert!(output.contains("error[T101]"));
        assert!(output.contains("expected </span>"));
        assert!(output.contains("<span> opened here"));
        assert!(output.contains("error[T102]"));
        assert!(output.contains("<div> is never closed"));
        assert_eq!(report.summary(), "Found 2 errors.");
    }

    #[test]
    fn pretty_no_errors() {
        let errors = Vec::new();
        let report = Report::new("a.jsx", "", &errors, None);
        assert_eq!(
            report.render_pretty(&DiagnosticRenderer::plain()),
            "No obvious tag nesting errors found.\n"
        );
    }
}
