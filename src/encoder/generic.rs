//! Shape-driven fallback encoder for tools without a dedicated encoder.

use super::value::{ListItem, ParamShape};
use crate::tool::{Params, ToolName};
use crate::xml::XmlWriter;

const ITEM_TAG: &str = "item";
const READ_FILE_ARG_TAG: &str = "file";

/// Tag wrapping each record inside the sequence parameter `key`.
///
/// Records are wrapped in `<item>`, except `read_file`'s `args`, whose
/// consumers expect `<file>`. This is a compatibility rule for that single
/// tool and parameter, not a pattern to extend.
pub fn list_record_tag(tool: &ToolName, key: &str) -> &'static str {
    if key == "args" && tool.as_str() == "read_file" {
        READ_FILE_ARG_TAG
    } else {
        ITEM_TAG
    }
}

/// Encodes `params` without any knowledge of the tool's contract.
///
/// One child element per non-null parameter, in mapping order. Sequences
/// and records nest one level deeper.
pub fn encode_generic(tool: &ToolName, params: &Params) -> String {
    let mut xml = XmlWriter::new(tool.as_str());

    for (key, value) in params {
        match ParamShape::classify(value) {
            ParamShape::Null => {}
            ParamShape::Scalar(scalar) => {
                xml.leaf(1, key, &scalar.to_text());
            }
            ParamShape::List(items) => {
                xml.open(1, key);
                for item in items {
                    match item {
                        ListItem::Scalar(scalar) => {
                            xml.leaf(2, ITEM_TAG, &scalar.to_text());
                        }
                        ListItem::Record(fields) => {
                            let tag = list_record_tag(tool, key);
                            xml.open(2, tag);
                            for (field, text) in &fields {
                                xml.leaf(3, field, text);
                            }
                            xml.close(2, tag);
                        }
                    }
                }
                xml.close(1, key);
            }
            ParamShape::Record(fields) => {
                xml.open(1, key);
                for (field, text) in &fields {
                    xml.leaf(2, field, text);
                }
                xml.close(1, key);
            }
        }
    }

    xml.finish()
}
