//! Tools acting on the host: shell commands and the browser.

use serde::Deserialize;

use super::ToolParams;
use crate::tool::ToolName;
use crate::xml::XmlWriter;

/// Parameters for `browser_action`.
#[derive(Debug, Clone, Deserialize)]
pub struct BrowserActionParams {
    pub action: String,
    pub url: Option<String>,
    /// `x,y` in viewport pixels
    pub coordinate: Option<String>,
    pub text: Option<String>,
    /// `width,height` in pixels
    pub size: Option<String>,
}

impl ToolParams for BrowserActionParams {
    const TOOL: ToolName = ToolName::BrowserAction;

    fn to_xml(&self) -> String {
        let mut xml = XmlWriter::new(Self::TOOL.as_str());
        xml.leaf(1, "action", &self.action)
            .optional_leaf(1, "url", self.url.as_deref())
            .optional_leaf(1, "coordinate", self.coordinate.as_deref())
            .optional_leaf(1, "text", self.text.as_deref())
            .optional_leaf(1, "size", self.size.as_deref());
        xml.finish()
    }
}

/// Parameters for `execute_command`.
#[derive(Debug, Clone, Deserialize)]
pub struct ExecuteCommandParams {
    pub command: String,
    pub cwd: Option<String>,
}

impl ToolParams for ExecuteCommandParams {
    const TOOL: ToolName = ToolName::ExecuteCommand;

    fn to_xml(&self) -> String {
        let mut xml = XmlWriter::new(Self::TOOL.as_str());
        xml.leaf(1, "command", &self.command)
            .optional_leaf(1, "cwd", self.cwd.as_deref());
        xml.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::super::params;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_browser_action_optional_fields_keep_fixed_order() {
        let xml = BrowserActionParams::encode_params(&params(json!({
            "size": "900,600",
            "action": "launch",
            "url": "http://localhost:3000/?q=a&b"
        })))
        .unwrap();
        assert_eq!(
            xml,
            concat!(
                "<browser_action>\n",
                "  <action>launch</action>\n",
                "  <url>http://localhost:3000/?q=a&amp;b</url>\n",
                "  <size>900,600</size>\n",
                "</browser_action>",
            )
        );
    }

    #[test]
    fn test_execute_command() {
        let xml = ExecuteCommandParams::encode_params(&params(json!({
            "command": "grep -r \"x\" . | head > out.txt",
            "cwd": null
        })))
        .unwrap();
        assert_eq!(
            xml,
            concat!(
                "<execute_command>\n",
                "  <command>grep -r &quot;x&quot; . | head &gt; out.txt</command>\n",
                "</execute_command>",
            )
        );
    }
}
