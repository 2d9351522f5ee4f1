//! Error types for conversion and format operations

use thiserror::Error;

/// Errors that can occur while converting between markup and the document tree
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// A mutation was attempted without an editable selection
    #[error("No active selection to insert into")]
    InvalidSelectionState,
    /// Markup that has no registered or transparent handling
    #[error("Unsupported markup: {0}")]
    UnsupportedMarkup(String),
    /// A style segment that could not be parsed
    #[error("Malformed style property '{0}'")]
    MalformedStyleProperty(String),
    /// A structural tree operation refused by the tree's invariants
    #[error("Tree mutation rejected: {0}")]
    TreeMutationRejected(String),
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error during parsing
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// Format does not support the operation
    #[error("Operation not supported: {0}")]
    NotSupported(String),
}
