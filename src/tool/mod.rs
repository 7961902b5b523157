pub mod invocation;
pub mod name;

pub use invocation::ToolInvocation;
pub use name::ToolName;

/// Named parameters of a tool call, in the order the model produced them.
pub type Params = serde_json::Map<String, serde_json::Value>;
