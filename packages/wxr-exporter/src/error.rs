//! Error types for the exporter.
//!
//! Uses the dual-error pattern: `ExportError` for library consumers with
//! detailed error context, and `IterationFault` for collection-scoped
//! failures that the orchestrator isolates instead of propagating.

use thiserror::Error;

/// Main error type for the exporter library.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The output target could not be opened.
    #[error("Failed to open output target {target}: {source}")]
    Open {
        target: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error while writing or flushing the document.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The underlying XML writer failed.
    #[error("XML writing failed: {0}")]
    Xml(String),

    /// A qualified name referenced a namespace that has no declaration in scope.
    #[error("Namespace '{0}' is not declared on the root element")]
    UndeclaredNamespace(String),

    /// An attribute was written after the start tag was already closed.
    #[error("Cannot write attribute '{name}': start tag already closed")]
    AttributeAfterContent { name: String },

    /// `end_element` was called with no element open.
    #[error("No open element to close")]
    UnbalancedEnd,

    /// The document was finished while elements were still open.
    #[error("Document finished with {0} unclosed element(s)")]
    UnclosedElements(usize),

    /// Namespace declarations are only allowed on the root start tag.
    #[error("Namespace declarations must be written on the root start tag")]
    NamespaceDeclarationOutsideRoot,

    /// The XML declaration was requested after other output.
    #[error("The XML declaration must be the first thing in the document")]
    DeclarationNotFirst,

    /// A processing instruction target is not a valid name or is reserved.
    #[error("Invalid processing instruction target: '{0}'")]
    InvalidPiTarget(String),

    /// A namespace prefix is not a valid XML prefix.
    #[error("Invalid namespace prefix: '{0}'")]
    InvalidPrefix(String),

    /// YAML snapshot could not be read.
    #[error("YAML snapshot parsing failed: {0}")]
    SnapshotYaml(#[from] serde_yaml_ng::Error),

    /// JSON snapshot could not be read.
    #[error("JSON snapshot parsing failed: {0}")]
    SnapshotJson(#[from] serde_json::Error),
}

/// Result type alias for exporter operations.
pub type Result<T> = std::result::Result<T, ExportError>;

/// A failure raised by a content provider while enumerating one collection.
///
/// Faults never abort an export: the orchestrator ends the affected
/// collection at the point of failure and moves on to the next one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("iteration fault: {message}")]
pub struct IterationFault {
    message: String,
}

impl IterationFault {
    /// Create a new fault with a human-readable message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message describing the fault.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
