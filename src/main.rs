//! Command-line front end: reads tool calls as JSON and prints their tagged text.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde_json::Value;
use tracing::debug;

use tool_xml::{encode_generic, logging, ToolInvocation, ToolName, ToolXmlConverter};

/// Convert model tool calls into tagged text.
#[derive(Debug, Parser)]
#[command(name = "tool-xml", version, about)]
struct Cli {
    /// Tool to convert (used with --params)
    #[arg(long, requires = "params", conflicts_with_all = ["input", "jsonl"])]
    tool: Option<String>,

    /// Parameters of --tool as a JSON object
    #[arg(long, requires = "tool")]
    params: Option<String>,

    /// File holding a tool call: {"name": ..., "arguments": ...}
    #[arg(long, conflicts_with = "jsonl")]
    input: Option<PathBuf>,

    /// Read one tool call per line from stdin
    #[arg(long)]
    jsonl: bool,

    /// Skip dedicated encoders and use the generic encoder only
    #[arg(long)]
    generic: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose).context("Failed to initialize logging")?;

    let stdout = io::stdout();
    run(&cli, io::stdin().lock(), stdout.lock())
}

/// Converts the tool calls selected by `cli`, writing one document per call to `out`.
fn run(cli: &Cli, input: impl BufRead, mut out: impl Write) -> Result<()> {
    let converter = ToolXmlConverter::default();
    let render = |invocation: &ToolInvocation| {
        if cli.generic {
            encode_generic(&invocation.name, &invocation.params)
        } else {
            converter.convert_invocation(invocation)
        }
    };

    if cli.jsonl {
        for (index, line) in input.lines().enumerate() {
            let line = line.context("Failed to read stdin")?;
            if line.trim().is_empty() {
                continue;
            }
            let invocation = ToolInvocation::from_json(&line)
                .with_context(|| format!("Invalid tool call on line {}", index + 1))?;
            debug!(tool = %invocation.name, line = index + 1, "Converting tool call");
            writeln!(out, "{}", render(&invocation))?;
        }
        return Ok(());
    }

    let invocation = match (&cli.tool, &cli.params, &cli.input) {
        (Some(tool), Some(params), _) => {
            let params = match serde_json::from_str::<Value>(params)
                .context("--params is not valid JSON")?
            {
                Value::Object(params) => params,
                _ => bail!("--params must be a JSON object"),
            };
            ToolInvocation::new(ToolName::new(tool.as_str()), params)
        }
        (_, _, Some(path)) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            ToolInvocation::from_json(&raw)
                .with_context(|| format!("Invalid tool call in {}", path.display()))?
        }
        _ => bail!("Provide --tool with --params, --input <FILE>, or --jsonl"),
    };

    writeln!(out, "{}", render(&invocation))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_with(args: &[&str], stdin: &str) -> Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("tool-xml").chain(args.iter().copied()))?;
        let mut out = Vec::new();
        run(&cli, stdin.as_bytes(), &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_tool_and_params_use_specific_encoder() {
        let out = run_with(
            &[
                "--tool",
                "read_file",
                "--params",
                r#"{"args":[{"path":"a.ts","line_range":[1,10]}]}"#,
            ],
            "",
        )
        .unwrap();
        assert_eq!(
            out,
            "<read_file>\n  <args>\n    <file>\n      <path>a.ts</path>\n      \
             <line_range>1,10</line_range>\n    </file>\n  </args>\n</read_file>\n"
        );
    }

    #[test]
    fn test_generic_flag_bypasses_specific_encoders() {
        let params = r#"{"question":"Q?","follow_up":[{"suggest":"A"}]}"#;
        let out = run_with(
            &["--tool", "ask_followup_question", "--params", params, "--generic"],
            "",
        )
        .unwrap();
        assert!(out.contains("<follow_up>\n    <item>\n      <suggest>A</suggest>\n    </item>"));

        let specific =
            run_with(&["--tool", "ask_followup_question", "--params", params], "").unwrap();
        assert!(specific.contains("<follow_up>\n    <suggest>A</suggest>\n  </follow_up>"));
    }

    #[test]
    fn test_params_must_be_an_object() {
        let err = run_with(&["--tool", "list_files", "--params", "[1, 2]"], "").unwrap_err();
        assert!(err.to_string().contains("--params must be a JSON object"));

        let err = run_with(&["--tool", "list_files", "--params", "{oops"], "").unwrap_err();
        assert!(err.to_string().contains("--params is not valid JSON"));
    }

    #[test]
    fn test_jsonl_skips_blank_lines() {
        let stdin = concat!(
            r#"{"name":"list_files","arguments":{"path":"src"}}"#,
            "\n\n   \n",
            r#"{"name":"attempt_completion","arguments":"{\"result\":\"ok\"}"}"#,
            "\n",
            r#"{"name":"new_task","arguments":""}"#,
            "\n",
        );
        let out = run_with(&["--jsonl"], stdin).unwrap();
        assert_eq!(
            out,
            "<list_files>\n  <path>src</path>\n</list_files>\n\
             <attempt_completion>\n  <result>ok</result>\n</attempt_completion>\n\
             <new_task>\n</new_task>\n"
        );
    }

    #[test]
    fn test_jsonl_reports_failing_line_number() {
        let stdin = "{\"name\":\"list_files\",\"arguments\":{\"path\":\"src\"}}\n\n{broken\n";
        let err = run_with(&["--jsonl"], stdin).unwrap_err();
        assert_eq!(err.to_string(), "Invalid tool call on line 3");
    }

    #[test]
    fn test_missing_source_is_rejected() {
        let err = run_with(&[], "").unwrap_err();
        assert!(err.to_string().contains("Provide --tool with --params"));
    }
}
