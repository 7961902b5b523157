//! The single entry point turning a tool call into tagged text.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::OnceLock;

use tracing::{debug, error, info, warn};

use crate::encoder::{encode_generic, EncoderRegistry};
use crate::tool::{Params, ToolInvocation, ToolName};

/// Which path produced a conversion's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// The tool's dedicated encoder succeeded
    Specific,
    /// No dedicated encoder is registered for the tool
    Generic,
    /// The dedicated encoder failed and the generic encoder took over
    Fallback,
}

/// Converts tool calls using a frozen [`EncoderRegistry`].
///
/// Conversion never fails: when the dedicated encoder is missing, returns an
/// error or panics, the generic encoder produces the output instead.
#[derive(Debug, Clone)]
pub struct ToolXmlConverter {
    registry: EncoderRegistry,
}

impl ToolXmlConverter {
    /// Creates a converter owning `registry`; it can no longer be modified.
    pub fn new(registry: EncoderRegistry) -> Self {
        Self { registry }
    }

    /// Returns the registry this converter dispatches on.
    pub fn registry(&self) -> &EncoderRegistry {
        &self.registry
    }

    /// Converts a tool call into its tagged-text document.
    pub fn convert(&self, tool: &ToolName, params: &Params) -> String {
        self.convert_with_outcome(tool, params).0
    }

    /// Converts an invocation into its tagged-text document.
    pub fn convert_invocation(&self, invocation: &ToolInvocation) -> String {
        self.convert(&invocation.name, &invocation.params)
    }

    /// Converts a tool call and reports which path produced the output.
    pub fn convert_with_outcome(&self, tool: &ToolName, params: &Params) -> (String, Encoding) {
        let Some(encoder) = self.registry.lookup(tool) else {
            info!(tool = %tool, "No specific XML encoder for tool, using generic conversion");
            return (encode_generic(tool, params), Encoding::Generic);
        };

        match panic::catch_unwind(AssertUnwindSafe(|| encoder.encode(params))) {
            Ok(Ok(xml)) => {
                debug!(tool = %tool, "Encoded tool call with specific encoder");
                return (xml, Encoding::Specific);
            }
            Ok(Err(err)) => {
                error!(tool = %tool, error = %err, "Error in specific XML encoder");
            }
            Err(payload) => {
                error!(
                    tool = %tool,
                    error = panic_message(payload.as_ref()),
                    "Specific XML encoder panicked"
                );
            }
        }

        warn!(tool = %tool, "Falling back to generic XML conversion");
        (encode_generic(tool, params), Encoding::Fallback)
    }
}

impl Default for ToolXmlConverter {
    fn default() -> Self {
        Self::new(EncoderRegistry::with_builtins())
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "unknown panic"
    }
}

/// Converts a tool call with the process-wide converter holding the builtin encoders.
pub fn convert_tool_call_to_xml(tool: &ToolName, params: &Params) -> String {
    static DEFAULT: OnceLock<ToolXmlConverter> = OnceLock::new();
    DEFAULT
        .get_or_init(ToolXmlConverter::default)
        .convert(tool, params)
}
