use serde::{Deserialize, Serialize};

/// Actions an agent can be offered. Names are the wire names the model
/// sees in tool definitions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::VariantArray,
)]
pub enum DefaultTool {
    #[serde(rename = "execute_command")]
    Bash,
    #[serde(rename = "read_file")]
    FileRead,
    #[serde(rename = "write_to_file")]
    FileNew,
    #[serde(rename = "replace_in_file")]
    FileEdit,
    #[serde(rename = "search_files")]
    Search,
    #[serde(rename = "list_files")]
    ListFiles,
    #[serde(rename = "list_code_definition_names")]
    ListCodeDef,
    #[serde(rename = "browser_action")]
    Browser,
    #[serde(rename = "web_fetch")]
    WebFetch,
    /// Invokes an MCP server tool from chat text.
    #[serde(rename = "use_mcp_tool")]
    McpUse,
    #[serde(rename = "access_mcp_resource")]
    McpAccess,
    #[serde(rename = "ask_followup_question")]
    Ask,
    #[serde(rename = "attempt_completion")]
    Attempt,
    #[serde(rename = "new_task")]
    NewTask,
    #[serde(rename = "plan_mode_respond")]
    PlanMode,
    #[serde(rename = "load_mcp_documentation")]
    McpDocs,
    #[serde(rename = "focus_chain")]
    Todo,
}

impl DefaultTool {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bash => "execute_command",
            Self::FileRead => "read_file",
            Self::FileNew => "write_to_file",
            Self::FileEdit => "replace_in_file",
            Self::Search => "search_files",
            Self::ListFiles => "list_files",
            Self::ListCodeDef => "list_code_definition_names",
            Self::Browser => "browser_action",
            Self::WebFetch => "web_fetch",
            Self::McpUse => "use_mcp_tool",
            Self::McpAccess => "access_mcp_resource",
            Self::Ask => "ask_followup_question",
            Self::Attempt => "attempt_completion",
            Self::NewTask => "new_task",
            Self::PlanMode => "plan_mode_respond",
            Self::McpDocs => "load_mcp_documentation",
            Self::Todo => "focus_chain",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "execute_command" => Some(Self::Bash),
            "read_file" => Some(Self::FileRead),
            "write_to_file" => Some(Self::FileNew),
            "replace_in_file" => Some(Self::FileEdit),
            "search_files" => Some(Self::Search),
            "list_files" => Some(Self::ListFiles),
            "list_code_definition_names" => Some(Self::ListCodeDef),
            "browser_action" => Some(Self::Browser),
            "web_fetch" => Some(Self::WebFetch),
            "use_mcp_tool" => Some(Self::McpUse),
            "access_mcp_resource" => Some(Self::McpAccess),
            "ask_followup_question" => Some(Self::Ask),
            "attempt_completion" => Some(Self::Attempt),
            "new_task" => Some(Self::NewTask),
            "plan_mode_respond" => Some(Self::PlanMode),
            "load_mcp_documentation" => Some(Self::McpDocs),
            "focus_chain" => Some(Self::Todo),
            _ => None,
        }
    }
}

impl std::fmt::Display for DefaultTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
