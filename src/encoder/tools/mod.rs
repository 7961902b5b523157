//! Dedicated encoders for the known tools.
//!
//! Each tool has a typed parameter struct deserialized from the raw
//! mapping. A mapping that does not fit the struct is reported as
//! [`EncodeError::InvalidParams`], which sends the call to the generic
//! encoder.

mod files;
mod interaction;
mod mcp;
mod system;

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::{DeserializeOwned, Deserializer, Error as _};
use serde::Deserialize;
use serde_json::Value;

pub use files::{
    ApplyDiffParams, CodebaseSearchParams, InsertContentParams, LineRange,
    ListCodeDefinitionNamesParams, ListFilesParams, ReadFileArg, ReadFileParams,
    SearchAndReplaceParams, SearchFilesParams, WriteToFileParams,
};
pub use interaction::{
    AskFollowupQuestionParams, AttemptCompletionParams, FetchInstructionsParams, FetchTask,
    FollowUpSuggestion, NewTaskParams, SwitchModeParams,
};
pub use mcp::{AccessMcpResourceParams, McpArguments, UseMcpToolParams};
pub use system::{BrowserActionParams, ExecuteCommandParams};

use super::value::number_text;
use super::{DynEncoder, ToolEncoder};
use crate::error::EncodeError;
use crate::tool::{Params, ToolName};

/// Typed parameters of a single known tool.
pub trait ToolParams: DeserializeOwned {
    /// The tool these parameters belong to.
    const TOOL: ToolName;

    /// Encodes the parameters. Total over every value of `Self`.
    fn to_xml(&self) -> String;

    /// Deserializes the raw mapping and encodes it.
    fn encode_params(params: &Params) -> Result<String, EncodeError> {
        let typed: Self = serde_json::from_value(Value::Object(params.clone()))
            .map_err(|source| EncodeError::InvalidParams {
                tool: Self::TOOL,
                source,
            })?;
        Ok(typed.to_xml())
    }
}

/// Adapts a [`ToolParams`] type to the [`ToolEncoder`] interface.
pub struct TypedEncoder<P> {
    _params: PhantomData<fn() -> P>,
}

impl<P> TypedEncoder<P> {
    pub fn new() -> Self {
        Self {
            _params: PhantomData,
        }
    }
}

impl<P> Default for TypedEncoder<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: ToolParams> fmt::Debug for TypedEncoder<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedEncoder")
            .field("tool", &P::TOOL)
            .finish()
    }
}

impl<P: ToolParams> ToolEncoder for TypedEncoder<P> {
    fn encode(&self, params: &Params) -> Result<String, EncodeError> {
        P::encode_params(params)
    }
}

/// Shared encoder for the typed parameters `P`.
pub fn encoder_for<P: ToolParams + 'static>() -> DynEncoder {
    Arc::new(TypedEncoder::<P>::new())
}

/// The dedicated encoder of a known tool; `None` for [`ToolName::Other`].
pub fn builtin_encoder(tool: &ToolName) -> Option<DynEncoder> {
    let encoder = match tool {
        ToolName::AccessMcpResource => encoder_for::<AccessMcpResourceParams>(),
        ToolName::ApplyDiff => encoder_for::<ApplyDiffParams>(),
        ToolName::AskFollowupQuestion => encoder_for::<AskFollowupQuestionParams>(),
        ToolName::AttemptCompletion => encoder_for::<AttemptCompletionParams>(),
        ToolName::BrowserAction => encoder_for::<BrowserActionParams>(),
        ToolName::CodebaseSearch => encoder_for::<CodebaseSearchParams>(),
        ToolName::ExecuteCommand => encoder_for::<ExecuteCommandParams>(),
        ToolName::FetchInstructions => encoder_for::<FetchInstructionsParams>(),
        ToolName::InsertContent => encoder_for::<InsertContentParams>(),
        ToolName::ListCodeDefinitionNames => encoder_for::<ListCodeDefinitionNamesParams>(),
        ToolName::ListFiles => encoder_for::<ListFilesParams>(),
        ToolName::NewTask => encoder_for::<NewTaskParams>(),
        ToolName::ReadFile => encoder_for::<ReadFileParams>(),
        ToolName::SearchAndReplace => encoder_for::<SearchAndReplaceParams>(),
        ToolName::SearchFiles => encoder_for::<SearchFilesParams>(),
        ToolName::SwitchMode => encoder_for::<SwitchModeParams>(),
        ToolName::UseMcpTool => encoder_for::<UseMcpToolParams>(),
        ToolName::WriteToFile => encoder_for::<WriteToFileParams>(),
        ToolName::Other(_) => return None,
    };
    Some(encoder)
}

/// A field sent to the model as text whatever its JSON type.
///
/// Strings are kept verbatim; numbers and booleans take their canonical
/// textual form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LooseText(pub String);

impl LooseText {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for LooseText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(text) => Ok(LooseText(text)),
            Value::Number(number) => Ok(LooseText(number_text(&number))),
            Value::Bool(flag) => Ok(LooseText(flag.to_string())),
            other => Err(D::Error::custom(format!(
                "expected a string, number or boolean, found {other}"
            ))),
        }
    }
}

#[cfg(test)]
pub(crate) fn params(value: Value) -> Params {
    match value {
        Value::Object(map) => map,
        _ => panic!("fixture must be an object"),
    }
}
