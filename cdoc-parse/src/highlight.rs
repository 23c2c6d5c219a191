//! Syntax highlighting seam for code fragments.
//!
//! The HTML renderer hands JSON code to a [`Highlighter`]. Any error makes the
//! renderer fall back to plain escaped `<pre>` output, so implementations are
//! free to reject input they do not understand.

use std::sync::Mutex;

/// Errors a highlighter may report. All of them are recoverable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HighlightError {
    #[error("No highlighter available for language '{0}'")]
    UnsupportedLanguage(String),

    #[error("Cannot highlight {language} input: {message}")]
    InvalidInput { language: String, message: String },
}

/// Turns `(code, language)` into highlighted, HTML-safe markup.
///
/// The returned markup is placed inside `<pre><code>` by the renderer.
pub trait Highlighter {
    fn highlight(&self, code: &str, language: &str) -> Result<String, HighlightError>;
}

/// Built-in tree-sitter highlighter for JSON, backed by `arborium`.
pub struct JsonHighlighter {
    inner: Mutex<arborium::Highlighter>,
}

impl JsonHighlighter {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(arborium::Highlighter::new()),
        }
    }
}

impl Default for JsonHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for JsonHighlighter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonHighlighter").finish_non_exhaustive()
    }
}

impl Highlighter for JsonHighlighter {
    fn highlight(&self, code: &str, language: &str) -> Result<String, HighlightError> {
        if !language.eq_ignore_ascii_case("json") {
            return Err(HighlightError::UnsupportedLanguage(language.to_string()));
        }

        let invalid = |message: String| HighlightError::InvalidInput {
            language: language.to_string(),
            message,
        };

        let mut hl = self
            .inner
            .lock()
            .map_err(|_| invalid("highlighter lock poisoned".into()))?;
        hl.highlight("json", code).map_err(|e| invalid(e.to_string()))
    }
}

/// Highlighter that declines everything; useful to force plain output.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHighlighter;

impl Highlighter for NoHighlighter {
    fn highlight(&self, _code: &str, language: &str) -> Result<String, HighlightError> {
        Err(HighlightError::UnsupportedLanguage(language.to_string()))
    }
}
