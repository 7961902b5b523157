//! # Tool XML
//!
//! Serializes the tool calls a language model emits into the tagged-text
//! form that is echoed back into its conversation.
//!
//! ## Features
//!
//! - **Dedicated encoders**: one typed encoder per known tool
//! - **Generic encoder**: shape-driven fallback for any other tool
//! - **Registry**: replace or add encoders before freezing the converter
//! - **Failure isolation**: conversion always yields a document
//!
//! ## Quick Start
//!
//! ```rust
//! use tool_xml::prelude::*;
//! use serde_json::json;
//!
//! let converter = ToolXmlConverter::default();
//! let call = ToolInvocation::from_value(json!({
//!     "name": "list_files",
//!     "arguments": {"path": "src", "recursive": true}
//! }))?;
//!
//! assert_eq!(
//!     converter.convert_invocation(&call),
//!     "<list_files>\n  <path>src</path>\n  <recursive>true</recursive>\n</list_files>"
//! );
//! # Ok::<(), tool_xml::ToolXmlError>(())
//! ```

pub mod converter;
pub mod encoder;
pub mod error;
pub mod logging;
pub mod tool;
pub mod xml;

// Re-exports for convenient usage
pub use converter::{convert_tool_call_to_xml, Encoding, ToolXmlConverter};
pub use encoder::{encode_generic, DynEncoder, EncoderRegistry, ToolEncoder, ToolParams};
pub use error::{EncodeError, ToolXmlError};
pub use tool::{Params, ToolInvocation, ToolName};
pub use xml::{escape_xml, XmlWriter};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::converter::{Encoding, ToolXmlConverter};
    pub use crate::encoder::{EncoderRegistry, ToolEncoder};
    pub use crate::error::EncodeError;
    pub use crate::tool::{Params, ToolInvocation, ToolName};
}
