use serde::{Deserialize, Serialize};

/// Named blocks of system prompt content. The rendering engine maps each
/// section to template text; selectors only decide which ones appear and
/// in what order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::VariantArray,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SystemPromptSection {
    AgentRole,
    ToolUse,
    TaskProgress,
    /// Guidance for invoking MCP servers through chat text.
    Mcp,
    EditingFiles,
    ActVsPlan,
    CliSubagents,
    Capabilities,
    Feedback,
    Rules,
    SystemInfo,
    Objective,
    UserInstructions,
}

impl SystemPromptSection {
    pub const fn key(self) -> &'static str {
        match self {
            Self::AgentRole => "AGENT_ROLE",
            Self::ToolUse => "TOOL_USE",
            Self::TaskProgress => "TASK_PROGRESS",
            Self::Mcp => "MCP",
            Self::EditingFiles => "EDITING_FILES",
            Self::ActVsPlan => "ACT_VS_PLAN",
            Self::CliSubagents => "CLI_SUBAGENTS",
            Self::Capabilities => "CAPABILITIES",
            Self::Feedback => "FEEDBACK",
            Self::Rules => "RULES",
            Self::SystemInfo => "SYSTEM_INFO",
            Self::Objective => "OBJECTIVE",
            Self::UserInstructions => "USER_INSTRUCTIONS",
        }
    }
}

impl std::fmt::Display for SystemPromptSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
