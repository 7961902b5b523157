use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Params, ToolName};
use crate::error::ToolXmlError;

/// A model-issued request naming a tool and supplying its parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolInvocation {
    /// The tool being called
    pub name: ToolName,
    /// Parameters in the order the model produced them
    #[serde(rename = "arguments", default)]
    pub params: Params,
}

impl ToolInvocation {
    /// Creates a new invocation.
    pub fn new(name: impl Into<ToolName>, params: Params) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }

    /// Parses a tool call of the form `{"name": ..., "arguments": ...}`.
    ///
    /// `arguments` may be an object or a string holding a JSON object, as
    /// function-calling APIs deliver it.
    pub fn from_json(raw: &str) -> Result<Self, ToolXmlError> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_value(value)
    }

    /// Builds an invocation from an already parsed tool call object.
    pub fn from_value(value: Value) -> Result<Self, ToolXmlError> {
        let Value::Object(mut call) = value else {
            return Err(ToolXmlError::InvalidInvocation(
                "tool call must be a JSON object".to_string(),
            ));
        };

        let name = match call.remove("name") {
            Some(Value::String(name)) => name,
            Some(_) => {
                return Err(ToolXmlError::InvalidInvocation(
                    "\"name\" must be a string".to_string(),
                ))
            }
            None => {
                return Err(ToolXmlError::InvalidInvocation(
                    "missing \"name\"".to_string(),
                ))
            }
        };

        let params = match call.remove("arguments") {
            None => Params::new(),
            Some(arguments) => params_from_value(arguments)?,
        };

        Ok(Self::new(name, params))
    }

    /// Builds an invocation from a function name and its JSON-encoded arguments.
    pub fn from_function_call(name: &str, arguments_json: &str) -> Result<Self, ToolXmlError> {
        Ok(Self::new(name, params_from_str(arguments_json)?))
    }
}

/// `null` and blank or `"null"` encoded arguments all mean no parameters.
fn params_from_value(arguments: Value) -> Result<Params, ToolXmlError> {
    match arguments {
        Value::Null => Ok(Params::new()),
        Value::Object(params) => Ok(params),
        Value::String(encoded) => params_from_str(&encoded),
        _ => Err(ToolXmlError::InvalidInvocation(
            "\"arguments\" must be an object".to_string(),
        )),
    }
}

fn params_from_str(encoded: &str) -> Result<Params, ToolXmlError> {
    if encoded.trim().is_empty() {
        return Ok(Params::new());
    }
    match serde_json::from_str(encoded)? {
        Value::Null => Ok(Params::new()),
        Value::Object(params) => Ok(params),
        _ => Err(ToolXmlError::InvalidInvocation(
            "encoded arguments must hold a JSON object".to_string(),
        )),
    }
}
