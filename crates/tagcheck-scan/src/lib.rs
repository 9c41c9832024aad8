//! Heuristic tag balance checking for JSX-like markup.
//!
//! The checker does not parse markup. It reads the source line by line,
//! removes comment-looking text, finds tag-looking substrings with a regular
//! expression and matches opening against closing tags with a stack.
//!
//! ## Known blind spots
//!
//! - `{/* ... */}` comments are only removed when they open and close on the
//!   same line.
//! - Everything after `//` is dropped, including URLs inside attributes.
//! - `>` inside an attribute (`onClick={() => go()}`) ends the tag early.
//!
//! An empty result therefore means "nothing obviously wrong", not "valid".
//!
//! ## Example
//!
//! ```
//! let errors = tagcheck_scan::check_source("<div><span></div></span>");
//! assert_eq!(
//!     errors[0].to_string(),
//!     "Line 1: Mismatched closing tag </div>. Expected closing for <span>"
//! );
//! ```

mod checker;
mod classes;
mod comments;
mod error;
mod lines;
mod span;
mod tags;

use camino::Utf8Path;
pub use checker::TagBalanceChecker;
pub use checker::VOID_ELEMENTS;
pub use comments::CleanLine;
pub use error::OpenTag;
pub use error::ScanError;
pub use error::TagError;
pub use lines::lines;
pub use lines::Line;
pub use lines::Lines;
pub use span::Span;
pub use tags::find_tags;
pub use tags::TagKind;
pub use tags::TagMatch;
use tracing::debug;

/// Check in-memory source with the default void elements.
#[must_use]
pub fn check_source(source: &str) -> Vec<TagError> {
    TagBalanceChecker::new().check(source)
}

/// Read a UTF-8 file fully into memory.
pub fn read_source(path: &Utf8Path) -> Result<String, ScanError> {
    let source = std::fs::read_to_string(path).map_err(|source| ScanError::Io {
        path: path.to_owned(),
        source,
    })?;
    debug!(%path, bytes = source.len(), "read source");
    Ok(source)
}

/// Read and check a file with the default void elements.
pub fn check_file(path: &Utf8Path) -> Result<Vec<TagError>, ScanError> {
    let source = read_source(path)?;
    Ok(check_source(&source))
}

/// Check a file and return the rendered messages, uncapped.
pub fn validate(path: &Utf8Path) -> Result<Vec<String>, ScanError> {
    Ok(check_file(path)?.iter().map(ToString::to_string).collect())
}
