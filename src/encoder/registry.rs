use std::collections::HashMap;
use std::fmt;

use tracing::warn;

use super::{builtin_encoder, DynEncoder};
use crate::tool::ToolName;

/// Maps tool identifiers to their dedicated encoders.
///
/// At most one encoder is active per tool; registering another one for the
/// same tool replaces it and logs a warning.
#[derive(Clone)]
pub struct EncoderRegistry {
    encoders: HashMap<String, DynEncoder>,
}

impl EncoderRegistry {
    /// Creates a new empty encoder registry.
    pub fn new() -> Self {
        Self {
            encoders: HashMap::new(),
        }
    }

    /// Creates a registry holding the dedicated encoder of every known tool.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for tool in ToolName::KNOWN {
            if let Some(encoder) = builtin_encoder(&tool) {
                registry.register(tool, encoder);
            }
        }
        registry
    }

    /// Registers an encoder, returning the one it replaced.
    pub fn register(
        &mut self,
        tool: impl Into<ToolName>,
        encoder: DynEncoder,
    ) -> Option<DynEncoder> {
        let tool = tool.into();
        let previous = self.encoders.insert(tool.as_str().to_string(), encoder);
        if previous.is_some() {
            warn!(tool = %tool, "Overwriting XML encoder for tool");
        }
        previous
    }

    /// Unregisters the encoder of a tool.
    pub fn unregister(&mut self, tool: &ToolName) -> Option<DynEncoder> {
        self.encoders.remove(tool.as_str())
    }

    /// Gets the encoder registered for a tool.
    pub fn lookup(&self, tool: &ToolName) -> Option<&DynEncoder> {
        self.encoders.get(tool.as_str())
    }

    /// Returns whether a tool has an encoder.
    pub fn contains(&self, tool: &ToolName) -> bool {
        self.encoders.contains_key(tool.as_str())
    }

    /// Returns the identifiers of all registered tools.
    pub fn tools(&self) -> impl Iterator<Item = &str> {
        self.encoders.keys().map(String::as_str)
    }

    /// Returns the number of registered encoders.
    pub fn len(&self) -> usize {
        self.encoders.len()
    }

    /// Returns whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.encoders.is_empty()
    }
}

impl Default for EncoderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EncoderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncoderRegistry")
            .field("encoders_count", &self.encoders.len())
            .finish()
    }
}

impl<'a> IntoIterator for &'a EncoderRegistry {
    type Item = (&'a String, &'a DynEncoder);
    type IntoIter = std::collections::hash_map::Iter<'a, String, DynEncoder>;

    fn into_iter(self) -> Self::IntoIter {
        self.encoders.iter()
    }
}
