use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of a tool the model can call.
///
/// Known tools get their own variant; anything else is carried verbatim in
/// [`ToolName::Other`] and handled by the generic encoder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ToolName {
    AccessMcpResource,
    ApplyDiff,
    AskFollowupQuestion,
    AttemptCompletion,
    BrowserAction,
    CodebaseSearch,
    ExecuteCommand,
    FetchInstructions,
    InsertContent,
    ListCodeDefinitionNames,
    ListFiles,
    NewTask,
    ReadFile,
    SearchAndReplace,
    SearchFiles,
    SwitchMode,
    UseMcpTool,
    WriteToFile,
    /// A tool without a dedicated variant
    Other(String),
}

impl ToolName {
    /// Every tool with a dedicated variant.
    pub const KNOWN: [ToolName; 18] = [
        ToolName::AccessMcpResource,
        ToolName::ApplyDiff,
        ToolName::AskFollowupQuestion,
        ToolName::AttemptCompletion,
        ToolName::BrowserAction,
        ToolName::CodebaseSearch,
        ToolName::ExecuteCommand,
        ToolName::FetchInstructions,
        ToolName::InsertContent,
        ToolName::ListCodeDefinitionNames,
        ToolName::ListFiles,
        ToolName::NewTask,
        ToolName::ReadFile,
        ToolName::SearchAndReplace,
        ToolName::SearchFiles,
        ToolName::SwitchMode,
        ToolName::UseMcpTool,
        ToolName::WriteToFile,
    ];

    /// Parses a tool identifier, mapping unknown names to `Other`.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        match name.as_str() {
            "access_mcp_resource" => ToolName::AccessMcpResource,
            "apply_diff" => ToolName::ApplyDiff,
            "ask_followup_question" => ToolName::AskFollowupQuestion,
            "attempt_completion" => ToolName::AttemptCompletion,
            "browser_action" => ToolName::BrowserAction,
            "codebase_search" => ToolName::CodebaseSearch,
            "execute_command" => ToolName::ExecuteCommand,
            "fetch_instructions" => ToolName::FetchInstructions,
            "insert_content" => ToolName::InsertContent,
            "list_code_definition_names" => ToolName::ListCodeDefinitionNames,
            "list_files" => ToolName::ListFiles,
            "new_task" => ToolName::NewTask,
            "read_file" => ToolName::ReadFile,
            "search_and_replace" => ToolName::SearchAndReplace,
            "search_files" => ToolName::SearchFiles,
            "switch_mode" => ToolName::SwitchMode,
            "use_mcp_tool" => ToolName::UseMcpTool,
            "write_to_file" => ToolName::WriteToFile,
            _ => ToolName::Other(name),
        }
    }

    /// Returns the identifier as the model spells it.
    pub fn as_str(&self) -> &str {
        match self {
            ToolName::AccessMcpResource => "access_mcp_resource",
            ToolName::ApplyDiff => "apply_diff",
            ToolName::AskFollowupQuestion => "ask_followup_question",
            ToolName::AttemptCompletion => "attempt_completion",
            ToolName::BrowserAction => "browser_action",
            ToolName::CodebaseSearch => "codebase_search",
            ToolName::ExecuteCommand => "execute_command",
            ToolName::FetchInstructions => "fetch_instructions",
            ToolName::InsertContent => "insert_content",
            ToolName::ListCodeDefinitionNames => "list_code_definition_names",
            ToolName::ListFiles => "list_files",
            ToolName::NewTask => "new_task",
            ToolName::ReadFile => "read_file",
            ToolName::SearchAndReplace => "search_and_replace",
            ToolName::SearchFiles => "search_files",
            ToolName::SwitchMode => "switch_mode",
            ToolName::UseMcpTool => "use_mcp_tool",
            ToolName::WriteToFile => "write_to_file",
            ToolName::Other(name) => name,
        }
    }

    /// Returns whether this identifier has a dedicated variant.
    pub fn is_known(&self) -> bool {
        !matches!(self, ToolName::Other(_))
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolName {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ToolName::new(s))
    }
}

impl From<String> for ToolName {
    fn from(name: String) -> Self {
        ToolName::new(name)
    }
}

impl From<&str> for ToolName {
    fn from(name: &str) -> Self {
        ToolName::new(name)
    }
}

impl From<ToolName> for String {
    fn from(name: ToolName) -> Self {
        match name {
            ToolName::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names_round_trip_through_str() {
        for tool in ToolName::KNOWN {
            assert!(tool.is_known());
            assert_eq!(ToolName::new(tool.as_str()), tool);
        }
    }

    #[test]
    fn test_unknown_name_is_kept_verbatim() {
        let tool: ToolName = "some_unregistered_tool".parse().unwrap();
        assert_eq!(tool, ToolName::Other("some_unregistered_tool".to_string()));
        assert_eq!(tool.to_string(), "some_unregistered_tool");
        assert!(!tool.is_known());
    }

    #[test]
    fn test_serde_uses_plain_string() {
        let tool: ToolName = serde_json::from_str("\"read_file\"").unwrap();
        assert_eq!(tool, ToolName::ReadFile);
        assert_eq!(serde_json::to_string(&ToolName::ListFiles).unwrap(), "\"list_files\"");
    }
}
