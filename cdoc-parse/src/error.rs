use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Errors surfaced by the library.
///
/// Parsing itself never fails: malformed JSON or odd tag tokens only degrade
/// the affected fragment. Only I/O at the edges produces an `Error`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Error reading file '{}': {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read layout '{}': {source}", path.display())]
    Layout {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A diagnostic message produced by validation.
///
/// Diagnostics are non-fatal: a document with diagnostics still renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    /// Group the diagnostic belongs to, or the file path for file-level checks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}
