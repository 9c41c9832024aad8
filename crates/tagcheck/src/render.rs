use annotate_snippets::AnnotationKind;
use annotate_snippets::Level;
use annotate_snippets::Renderer;
use annotate_snippets::Snippet;
use tagcheck_scan::Span;

/// A single annotation to render on a source snippet.
///
/// The `primary` flag controls whether it gets `^^^` (primary) or `---`
/// (context) underline treatment.
#[derive(Debug, Clone)]
pub struct DiagnosticAnnotation {
    pub span: Span,
    pub label: String,
    pub primary: bool,
}

/// A diagnostic ready for rendering.
#[derive(Debug)]
pub struct Diagnostic<'a> {
    pub source: &'a str,
    pub path: &'a str,
    pub code: &'a str,
    pub message: String,
    pub annotations: Vec<DiagnosticAnnotation>,
    pub notes: Vec<String>,
}

impl<'a> Diagnostic<'a> {
    #[must_use]
    pub fn new(source: &'a str, path: &'a str, code: &'a str, message: String) -> Self {
        Self {
            source,
            path,
            code,
            message,
            annotations: Vec::new(),
            notes: Vec::new(),
        }
    }

    #[must_use]
    pub fn annotation(mut self, span: Span, label: impl Into<String>, primary: bool) -> Self {
        self.annotations.push(DiagnosticAnnotation {
            span,
            label: label.into(),
            primary,
        });
        self
    }

    #[must_use]
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

/// Renders diagnostics as formatted text using `annotate-snippets`.
///
/// - **Plain**: No ANSI colors, for snapshot tests and piped output
/// - **Styled**: ANSI colors and bold, for terminal display
#[derive(Debug)]
pub struct DiagnosticRenderer {
    renderer: Renderer,
}

impl DiagnosticRenderer {
    #[must_use]
    pub fn plain() -> Self {
        Self {
            renderer: Renderer::plain(),
        }
    }

    #[must_use]
    pub fn styled() -> Self {
        Self {
            renderer: Renderer::styled(),
        }
    }

    #[must_use]
    pub fn render(&self, diagnostic: &Diagnostic<'_>) -> String {
        let mut snippet = Snippet::source(diagnostic.source)
            .path(diagnostic.path)
            .line_start(1);

        for ann in &diagnostic.annotations {
            let start = ann.span.start_usize().min(diagnostic.source.len());
            let end = ann.span.end_usize().min(diagnostic.source.len());
            let kind = if ann.primary {
                AnnotationKind::Primary
            } else {
                AnnotationKind::Context
            };
            snippet = snippet.annotation(kind.span(start..end).label(ann.label.as_str()));
        }

        let mut title = Level::ERROR
            .primary_title(diagnostic.message.as_str())
            .id(diagnostic.code)
            .element(snippet);

        for note in &diagnostic.notes {
            title = title.element(Level::NOTE.message(note.as_str()));
        }

        let report = &[title];
        self.renderer.render(report).clone()
    }
}
