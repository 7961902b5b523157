//! # Custom Encoder Example
//!
//! This example replaces a builtin encoder and registers one for a new tool
//! before freezing the registry into a converter.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --example custom_encoder
//! ```

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{json, Value};
use tool_xml::prelude::*;
use tool_xml::XmlWriter;

/// Typed parameters for a tool the builtin set does not know.
#[derive(Debug, Deserialize)]
struct LookupWeatherParams {
    city: String,
    units: Option<String>,
}

fn encode_lookup_weather(params: &Params) -> Result<String, EncodeError> {
    let typed: LookupWeatherParams = serde_json::from_value(Value::Object(params.clone()))
        .map_err(|e| EncodeError::Failed(e.to_string()))?;

    let mut xml = XmlWriter::new("lookup_weather");
    xml.leaf(1, "city", &typed.city)
        .optional_leaf(1, "units", typed.units.as_deref());
    Ok(xml.finish())
}

fn main() {
    tracing_subscriber::fmt::init();

    let mut registry = EncoderRegistry::with_builtins();
    registry.register("lookup_weather", Arc::new(encode_lookup_weather));

    // Replacing a builtin logs a warning
    registry.register(
        ToolName::AttemptCompletion,
        Arc::new(|params: &Params| -> Result<String, EncodeError> {
            let result = params
                .get("result")
                .and_then(|value| value.as_str())
                .ok_or_else(|| EncodeError::Failed("result is required".to_string()))?;
            let mut xml = XmlWriter::new("attempt_completion");
            xml.leaf(1, "result", result.trim());
            Ok(xml.finish())
        }),
    );

    let converter = ToolXmlConverter::new(registry);

    let weather = json!({"city": "Oslo", "units": "metric"});
    let done = json!({"result": "  All tests pass.  "});
    let broken = json!({"outcome": "missing result"});

    for (tool, params) in [
        ("lookup_weather", weather),
        ("attempt_completion", done),
        ("attempt_completion", broken),
    ] {
        let params = params.as_object().cloned().unwrap_or_default();
        let (xml, encoding) = converter.convert_with_outcome(&ToolName::new(tool), &params);
        println!("--- {} ({:?})\n{}", tool, encoding, xml);
    }
}
