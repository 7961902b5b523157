//! Encoders turning a tool's parameters into tagged text.

pub mod generic;
pub mod registry;
pub mod tools;
pub mod value;

use std::sync::Arc;

pub use generic::{encode_generic, list_record_tag};
pub use registry::EncoderRegistry;
pub use tools::{builtin_encoder, ToolParams};

use crate::error::EncodeError;
use crate::tool::Params;

/// Turns the parameters of one tool into its tagged-text document.
pub trait ToolEncoder: Send + Sync {
    fn encode(&self, params: &Params) -> Result<String, EncodeError>;
}

impl<F> ToolEncoder for F
where
    F: Fn(&Params) -> Result<String, EncodeError> + Send + Sync,
{
    fn encode(&self, params: &Params) -> Result<String, EncodeError> {
        self(params)
    }
}

/// A type alias for a shared encoder reference.
pub type DynEncoder = Arc<dyn ToolEncoder>;
