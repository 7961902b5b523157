//! File-system tools: reading, writing and searching the workspace.

use serde::Deserialize;

use super::{LooseText, ToolParams};
use crate::tool::ToolName;
use crate::xml::XmlWriter;

/// Parameters for `apply_diff`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApplyDiffParams {
    pub path: String,
    /// Free-text diff payload, escaped as-is
    pub diff: String,
}

impl ToolParams for ApplyDiffParams {
    const TOOL: ToolName = ToolName::ApplyDiff;

    fn to_xml(&self) -> String {
        let mut xml = XmlWriter::new(Self::TOOL.as_str());
        xml.leaf(1, "path", &self.path).leaf(1, "diff", &self.diff);
        xml.finish()
    }
}

/// Parameters for `codebase_search`.
#[derive(Debug, Clone, Deserialize)]
pub struct CodebaseSearchParams {
    pub query: String,
    pub path: Option<String>,
}

impl ToolParams for CodebaseSearchParams {
    const TOOL: ToolName = ToolName::CodebaseSearch;

    fn to_xml(&self) -> String {
        let mut xml = XmlWriter::new(Self::TOOL.as_str());
        xml.leaf(1, "query", &self.query)
            .optional_leaf(1, "path", self.path.as_deref());
        xml.finish()
    }
}

/// Parameters for `insert_content`.
#[derive(Debug, Clone, Deserialize)]
pub struct InsertContentParams {
    pub path: String,
    /// 1-based line to insert before; `0` appends
    pub line: LooseText,
    pub content: String,
}

impl ToolParams for InsertContentParams {
    const TOOL: ToolName = ToolName::InsertContent;

    fn to_xml(&self) -> String {
        let mut xml = XmlWriter::new(Self::TOOL.as_str());
        xml.leaf(1, "path", &self.path)
            .leaf(1, "line", self.line.as_str())
            .leaf(1, "content", &self.content);
        xml.finish()
    }
}

/// Parameters for `list_code_definition_names`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListCodeDefinitionNamesParams {
    pub path: String,
}

impl ToolParams for ListCodeDefinitionNamesParams {
    const TOOL: ToolName = ToolName::ListCodeDefinitionNames;

    fn to_xml(&self) -> String {
        let mut xml = XmlWriter::new(Self::TOOL.as_str());
        xml.leaf(1, "path", &self.path);
        xml.finish()
    }
}

/// Parameters for `list_files`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListFilesParams {
    pub path: String,
    pub recursive: Option<LooseText>,
}

impl ToolParams for ListFilesParams {
    const TOOL: ToolName = ToolName::ListFiles;

    fn to_xml(&self) -> String {
        let mut xml = XmlWriter::new(Self::TOOL.as_str());
        xml.leaf(1, "path", &self.path)
            .optional_leaf(1, "recursive", self.recursive.as_ref().map(LooseText::as_str));
        xml.finish()
    }
}

/// Line range of a `read_file` argument, either `[start, end]` or `"start-end"` text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LineRange {
    Bounds(Vec<LooseText>),
    Text(String),
}

impl LineRange {
    /// Both forms normalize to the same comma-joined text.
    pub fn to_text(&self) -> String {
        match self {
            LineRange::Bounds(bounds) => bounds
                .iter()
                .map(LooseText::as_str)
                .collect::<Vec<_>>()
                .join(","),
            LineRange::Text(text) => text.clone(),
        }
    }
}

/// One file requested by `read_file`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReadFileArg {
    pub path: String,
    pub line_range: Option<LineRange>,
}

/// Parameters for `read_file`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReadFileParams {
    #[serde(default)]
    pub args: Option<Vec<ReadFileArg>>,
}

impl ToolParams for ReadFileParams {
    const TOOL: ToolName = ToolName::ReadFile;

    fn to_xml(&self) -> String {
        let mut xml = XmlWriter::new(Self::TOOL.as_str());
        if let Some(args) = self.args.as_deref().filter(|args| !args.is_empty()) {
            xml.open(1, "args");
            for arg in args {
                xml.open(2, "file").leaf(3, "path", &arg.path);
                if let Some(range) = &arg.line_range {
                    xml.leaf(3, "line_range", &range.to_text());
                }
                xml.close(2, "file");
            }
            xml.close(1, "args");
        }
        xml.finish()
    }
}

/// Parameters for `search_and_replace`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchAndReplaceParams {
    pub path: String,
    pub search: String,
    pub replace: String,
    pub start_line: Option<LooseText>,
    pub end_line: Option<LooseText>,
    pub use_regex: Option<LooseText>,
    pub ignore_case: Option<LooseText>,
}

impl ToolParams for SearchAndReplaceParams {
    const TOOL: ToolName = ToolName::SearchAndReplace;

    fn to_xml(&self) -> String {
        let mut xml = XmlWriter::new(Self::TOOL.as_str());
        xml.leaf(1, "path", &self.path)
            .leaf(1, "search", &self.search)
            .leaf(1, "replace", &self.replace)
            .optional_leaf(1, "start_line", self.start_line.as_ref().map(LooseText::as_str))
            .optional_leaf(1, "end_line", self.end_line.as_ref().map(LooseText::as_str))
            .optional_leaf(1, "use_regex", self.use_regex.as_ref().map(LooseText::as_str))
            .optional_leaf(1, "ignore_case", self.ignore_case.as_ref().map(LooseText::as_str));
        xml.finish()
    }
}

/// Parameters for `search_files`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchFilesParams {
    pub path: String,
    pub regex: String,
    pub file_pattern: Option<String>,
}

impl ToolParams for SearchFilesParams {
    const TOOL: ToolName = ToolName::SearchFiles;

    fn to_xml(&self) -> String {
        let mut xml = XmlWriter::new(Self::TOOL.as_str());
        xml.leaf(1, "path", &self.path)
            .leaf(1, "regex", &self.regex)
            .optional_leaf(1, "file_pattern", self.file_pattern.as_deref());
        xml.finish()
    }
}

/// Parameters for `write_to_file`.
#[derive(Debug, Clone, Deserialize)]
pub struct WriteToFileParams {
    pub path: String,
    pub content: String,
    pub line_count: LooseText,
}

impl ToolParams for WriteToFileParams {
    const TOOL: ToolName = ToolName::WriteToFile;

    fn to_xml(&self) -> String {
        let mut xml = XmlWriter::new(Self::TOOL.as_str());
        xml.leaf(1, "path", &self.path)
            .leaf(1, "content", &self.content)
            .leaf(1, "line_count", self.line_count.as_str());
        xml.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::super::params;
    use super::*;
    use serde_json::json;

    fn encode<P: ToolParams>(value: serde_json::Value) -> String {
        P::encode_params(&params(value)).unwrap()
    }

    #[test]
    fn test_read_file_line_range_forms_agree() {
        let from_pair = encode::<ReadFileParams>(json!({
            "args": [{"path": "a.ts", "line_range": [1, 10]}]
        }));
        let from_text = encode::<ReadFileParams>(json!({
            "args": [{"path": "a.ts", "line_range": "1,10"}]
        }));

        assert_eq!(from_pair, from_text);
        assert_eq!(
            from_pair,
            concat!(
                "<read_file>\n",
                "  <args>\n",
                "    <file>\n",
                "      <path>a.ts</path>\n",
                "      <line_range>1,10</line_range>\n",
                "    </file>\n",
                "  </args>\n",
                "</read_file>",
            )
        );
    }

    #[test]
    fn test_read_file_without_args() {
        assert_eq!(encode::<ReadFileParams>(json!({})), "<read_file>\n</read_file>");
        assert_eq!(
            encode::<ReadFileParams>(json!({"args": []})),
            "<read_file>\n</read_file>"
        );
    }

    #[test]
    fn test_read_file_multiple_files() {
        let xml = encode::<ReadFileParams>(json!({
            "args": [{"path": "a.rs"}, {"path": "b & c.rs", "line_range": "5-9"}]
        }));
        assert_eq!(
            xml,
            concat!(
                "<read_file>\n",
                "  <args>\n",
                "    <file>\n",
                "      <path>a.rs</path>\n",
                "    </file>\n",
                "    <file>\n",
                "      <path>b &amp; c.rs</path>\n",
                "      <line_range>5-9</line_range>\n",
                "    </file>\n",
                "  </args>\n",
                "</read_file>",
            )
        );
    }

    #[test]
    fn test_write_to_file_line_count_as_text() {
        let xml = encode::<WriteToFileParams>(json!({
            "path": "main.rs",
            "content": "if a < b && c > d {}",
            "line_count": 1
        }));
        assert_eq!(
            xml,
            concat!(
                "<write_to_file>\n",
                "  <path>main.rs</path>\n",
                "  <content>if a &lt; b &amp;&amp; c &gt; d {}</content>\n",
                "  <line_count>1</line_count>\n",
                "</write_to_file>",
            )
        );
    }

    #[test]
    fn test_insert_content_line_accepts_number_or_text() {
        let numeric =
            encode::<InsertContentParams>(json!({"path": "f", "line": 0, "content": "x"}));
        let textual =
            encode::<InsertContentParams>(json!({"path": "f", "line": "0", "content": "x"}));
        assert_eq!(numeric, textual);
        assert_eq!(
            numeric,
            concat!(
                "<insert_content>\n",
                "  <path>f</path>\n",
                "  <line>0</line>\n",
                "  <content>x</content>\n",
                "</insert_content>",
            )
        );
    }

    #[test]
    fn test_list_files_recursive_is_optional() {
        assert_eq!(
            encode::<ListFilesParams>(json!({"path": "src"})),
            "<list_files>\n  <path>src</path>\n</list_files>"
        );
        assert_eq!(
            encode::<ListFilesParams>(json!({"path": "src", "recursive": false})),
            "<list_files>\n  <path>src</path>\n  <recursive>false</recursive>\n</list_files>"
        );
    }

    #[test]
    fn test_search_and_replace_field_order_is_fixed() {
        let xml = encode::<SearchAndReplaceParams>(json!({
            "ignore_case": true,
            "start_line": 3,
            "replace": "\"new\"",
            "search": "'old'",
            "path": "lib.rs"
        }));
        assert_eq!(
            xml,
            concat!(
                "<search_and_replace>\n",
                "  <path>lib.rs</path>\n",
                "  <search>&apos;old&apos;</search>\n",
                "  <replace>&quot;new&quot;</replace>\n",
                "  <start_line>3</start_line>\n",
                "  <ignore_case>true</ignore_case>\n",
                "</search_and_replace>",
            )
        );
    }

    #[test]
    fn test_search_files_and_codebase_search() {
        assert_eq!(
            encode::<SearchFilesParams>(json!({
                "path": ".",
                "regex": "a<b",
                "file_pattern": "*.rs"
            })),
            concat!(
                "<search_files>\n",
                "  <path>.</path>\n",
                "  <regex>a&lt;b</regex>\n",
                "  <file_pattern>*.rs</file_pattern>\n",
                "</search_files>",
            )
        );
        assert_eq!(
            encode::<CodebaseSearchParams>(json!({"query": "auth"})),
            "<codebase_search>\n  <query>auth</query>\n</codebase_search>"
        );
    }

    #[test]
    fn test_apply_diff_and_list_code_definition_names() {
        assert_eq!(
            encode::<ApplyDiffParams>(json!({
                "path": "x",
                "diff": "<<<<<<< SEARCH\n=======\n>>>>>>> REPLACE"
            })),
            concat!(
                "<apply_diff>\n",
                "  <path>x</path>\n",
                "  <diff>&lt;&lt;&lt;&lt;&lt;&lt;&lt; SEARCH\n",
                "=======\n",
                "&gt;&gt;&gt;&gt;&gt;&gt;&gt; REPLACE</diff>\n",
                "</apply_diff>",
            )
        );
        assert_eq!(
            encode::<ListCodeDefinitionNamesParams>(json!({"path": "src"})),
            "<list_code_definition_names>\n  <path>src</path>\n</list_code_definition_names>"
        );
    }

    #[test]
    fn test_missing_required_field_fails() {
        assert!(SearchFilesParams::encode_params(&params(json!({"path": "."}))).is_err());
        let no_path = params(json!({"args": [{"line_range": "1"}]}));
        assert!(ReadFileParams::encode_params(&no_path).is_err());
    }
}
