//! Error types for the tool-xml library.

use thiserror::Error;

use crate::tool::ToolName;

/// Errors raised by a specific encoder.
///
/// These never reach callers of the converter: any `EncodeError` sends the
/// call down the generic path instead.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The parameters do not satisfy the tool's contract
    #[error("invalid parameters for {tool}: {source}")]
    InvalidParams {
        tool: ToolName,
        #[source]
        source: serde_json::Error,
    },

    /// Any other encoder failure
    #[error("{0}")]
    Failed(String),
}

/// Unified error type for the library's parsing boundaries.
#[derive(Debug, Error)]
pub enum ToolXmlError {
    /// The raw tool call does not have the expected shape
    #[error("Invalid tool invocation: {0}")]
    InvalidInvocation(String),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
