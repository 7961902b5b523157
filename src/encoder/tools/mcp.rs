//! Tools reaching connected MCP servers.

use serde::Deserialize;
use serde_json::Value;

use super::ToolParams;
use crate::tool::ToolName;
use crate::xml::XmlWriter;

/// Parameters for `access_mcp_resource`.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessMcpResourceParams {
    pub server_name: String,
    pub uri: String,
}

impl ToolParams for AccessMcpResourceParams {
    const TOOL: ToolName = ToolName::AccessMcpResource;

    fn to_xml(&self) -> String {
        let mut xml = XmlWriter::new(Self::TOOL.as_str());
        xml.leaf(1, "server_name", &self.server_name)
            .leaf(1, "uri", &self.uri);
        xml.finish()
    }
}

/// Arguments forwarded to an MCP tool.
///
/// The variant is decided by JSON type alone: a string is taken as
/// already serialized text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum McpArguments {
    Text(String),
    Structured(Value),
}

impl McpArguments {
    /// Compact JSON for structured arguments, keys in the order received.
    pub fn to_text(&self) -> String {
        match self {
            McpArguments::Text(text) => text.clone(),
            McpArguments::Structured(value) => value.to_string(),
        }
    }
}

/// Parameters for `use_mcp_tool`.
#[derive(Debug, Clone, Deserialize)]
pub struct UseMcpToolParams {
    pub server_name: String,
    pub tool_name: String,
    pub arguments: McpArguments,
}

impl ToolParams for UseMcpToolParams {
    const TOOL: ToolName = ToolName::UseMcpTool;

    fn to_xml(&self) -> String {
        let mut xml = XmlWriter::new(Self::TOOL.as_str());
        xml.leaf(1, "server_name", &self.server_name)
            .leaf(1, "tool_name", &self.tool_name)
            .leaf(1, "arguments", &self.arguments.to_text());
        xml.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::super::params;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_structured_arguments_are_compact_json() {
        let xml = UseMcpToolParams::encode_params(&params(json!({
            "server_name": "weather",
            "tool_name": "forecast",
            "arguments": {"city": "San Francisco", "days": 5}
        })))
        .unwrap();
        assert_eq!(
            xml,
            concat!(
                "<use_mcp_tool>\n",
                "  <server_name>weather</server_name>\n",
                "  <tool_name>forecast</tool_name>\n",
                "  <arguments>{&quot;city&quot;:&quot;San Francisco&quot;,",
                "&quot;days&quot;:5}</arguments>\n",
                "</use_mcp_tool>",
            )
        );
    }

    #[test]
    fn test_text_and_structured_arguments_agree() {
        let structured = UseMcpToolParams::encode_params(&params(json!({
            "server_name": "s",
            "tool_name": "t",
            "arguments": {"b": 1, "a": [true, null]}
        })))
        .unwrap();
        let text = UseMcpToolParams::encode_params(&params(json!({
            "server_name": "s",
            "tool_name": "t",
            "arguments": "{\"b\":1,\"a\":[true,null]}"
        })))
        .unwrap();
        assert_eq!(structured, text);
    }

    #[test]
    fn test_arguments_keep_insertion_order() {
        let args: McpArguments = serde_json::from_value(json!({"z": 1, "a": 2})).unwrap();
        assert_eq!(args.to_text(), r#"{"z":1,"a":2}"#);
    }

    #[test]
    fn test_missing_arguments_fail() {
        assert!(UseMcpToolParams::encode_params(&params(json!({
            "server_name": "s",
            "tool_name": "t"
        })))
        .is_err());
    }

    #[test]
    fn test_access_mcp_resource() {
        let xml = AccessMcpResourceParams::encode_params(&params(json!({
            "server_name": "docs",
            "uri": "docs://page?a=1&b=2"
        })))
        .unwrap();
        assert_eq!(
            xml,
            concat!(
                "<access_mcp_resource>\n",
                "  <server_name>docs</server_name>\n",
                "  <uri>docs://page?a=1&amp;b=2</uri>\n",
                "</access_mcp_resource>",
            )
        );
    }
}
