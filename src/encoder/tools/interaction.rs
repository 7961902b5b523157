//! Conversation and workflow tools: questions, completion, modes and tasks.

use serde::Deserialize;

use super::ToolParams;
use crate::tool::ToolName;
use crate::xml::XmlWriter;

/// A suggested answer to a follow-up question.
#[derive(Debug, Clone, Deserialize)]
pub struct FollowUpSuggestion {
    pub suggest: String,
}

/// Parameters for `ask_followup_question`.
#[derive(Debug, Clone, Deserialize)]
pub struct AskFollowupQuestionParams {
    pub question: String,
    pub follow_up: Option<Vec<FollowUpSuggestion>>,
}

impl ToolParams for AskFollowupQuestionParams {
    const TOOL: ToolName = ToolName::AskFollowupQuestion;

    fn to_xml(&self) -> String {
        let mut xml = XmlWriter::new(Self::TOOL.as_str());
        xml.leaf(1, "question", &self.question);
        // suggestions sit directly under <follow_up>, one <suggest> each
        if let Some(follow_up) = self.follow_up.as_deref().filter(|s| !s.is_empty()) {
            xml.open(1, "follow_up");
            for suggestion in follow_up {
                xml.leaf(2, "suggest", &suggestion.suggest);
            }
            xml.close(1, "follow_up");
        }
        xml.finish()
    }
}

/// Parameters for `attempt_completion`.
#[derive(Debug, Clone, Deserialize)]
pub struct AttemptCompletionParams {
    pub result: String,
    pub command: Option<String>,
}

impl ToolParams for AttemptCompletionParams {
    const TOOL: ToolName = ToolName::AttemptCompletion;

    fn to_xml(&self) -> String {
        let mut xml = XmlWriter::new(Self::TOOL.as_str());
        xml.leaf(1, "result", &self.result)
            .optional_leaf(1, "command", self.command.as_deref());
        xml.finish()
    }
}

/// Tasks `fetch_instructions` can fetch instructions for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchTask {
    CreateMcpServer,
    CreateMode,
}

impl FetchTask {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchTask::CreateMcpServer => "create_mcp_server",
            FetchTask::CreateMode => "create_mode",
        }
    }
}

/// Parameters for `fetch_instructions`.
#[derive(Debug, Clone, Deserialize)]
pub struct FetchInstructionsParams {
    pub task: FetchTask,
}

impl ToolParams for FetchInstructionsParams {
    const TOOL: ToolName = ToolName::FetchInstructions;

    fn to_xml(&self) -> String {
        let mut xml = XmlWriter::new(Self::TOOL.as_str());
        xml.leaf(1, "task", self.task.as_str());
        xml.finish()
    }
}

/// Parameters for `new_task`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewTaskParams {
    /// Slug of the mode to start the task in
    pub mode: String,
    pub message: String,
}

impl ToolParams for NewTaskParams {
    const TOOL: ToolName = ToolName::NewTask;

    fn to_xml(&self) -> String {
        let mut xml = XmlWriter::new(Self::TOOL.as_str());
        xml.leaf(1, "mode", &self.mode).leaf(1, "message", &self.message);
        xml.finish()
    }
}

/// Parameters for `switch_mode`.
#[derive(Debug, Clone, Deserialize)]
pub struct SwitchModeParams {
    pub mode_slug: String,
    pub reason: Option<String>,
}

impl ToolParams for SwitchModeParams {
    const TOOL: ToolName = ToolName::SwitchMode;

    fn to_xml(&self) -> String {
        let mut xml = XmlWriter::new(Self::TOOL.as_str());
        xml.leaf(1, "mode_slug", &self.mode_slug)
            .optional_leaf(1, "reason", self.reason.as_deref());
        xml.finish()
    }
}
