//! # Basic Conversion Example
//!
//! This example converts a few model tool calls into tagged text.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run --example basic_convert
//! ```

use serde_json::json;
use tool_xml::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let converter = ToolXmlConverter::default();

    // Tool calls as a function-calling API delivers them
    let calls = [
        json!({
            "name": "read_file",
            "arguments": {"args": [{"path": "src/main.rs", "line_range": [1, 40]}]}
        }),
        json!({
            "name": "ask_followup_question",
            "arguments": concat!(
                "{\"question\":\"Which branch?\",",
                "\"follow_up\":[{\"suggest\":\"main\"},{\"suggest\":\"dev\"}]}"
            )
        }),
        json!({
            "name": "lookup_weather",
            "arguments": {"city": "Zürich", "units": ["metric"]}
        }),
    ];

    for call in calls {
        let invocation = ToolInvocation::from_value(call)?;
        let (xml, encoding) = converter.convert_with_outcome(&invocation.name, &invocation.params);
        println!("--- {} ({:?})", invocation.name, encoding);
        println!("{}", xml);
    }

    Ok(())
}
