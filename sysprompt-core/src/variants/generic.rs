//! Catch-all prompt for models no more specific variant claims.

use super::validated;
use crate::context::SystemPromptContext;
use crate::error::VariantError;
use crate::model_family::ModelFamily;
use crate::sections::SystemPromptSection;
use crate::tools::DefaultTool;
use crate::variant::builder::VariantBuilder;
use crate::variant::validator::ValidationOptions;
use crate::variant::{TemplateRef, Variant};

pub const FAMILY: ModelFamily = ModelFamily::Generic;

const BASE: TemplateRef = TemplateRef("generic/base");

pub fn config(options: &ValidationOptions) -> Result<Variant, VariantError> {
    let variant = VariantBuilder::new(FAMILY)
        .description("Fallback prompt for models without a dedicated variant.")
        .version(1)
        .tags(["generic", "fallback", "production"])
        .labels([("stable", 1), ("production", 1)])
        .matcher(|_| true)
        .template(BASE)
        .components(select_components)
        .tools(select_tools)
        .placeholders([("MODEL_FAMILY", FAMILY.as_str())])
        .build()?;

    validated(variant, options)
}

pub fn select_components(context: &SystemPromptContext) -> Vec<SystemPromptSection> {
    let mut sections = vec![
        SystemPromptSection::AgentRole,
        SystemPromptSection::ToolUse,
        SystemPromptSection::TaskProgress,
    ];
    if context.uses_inline_tools() {
        sections.push(SystemPromptSection::Mcp);
    }
    sections.extend([
        SystemPromptSection::EditingFiles,
        SystemPromptSection::ActVsPlan,
        SystemPromptSection::Capabilities,
        SystemPromptSection::Rules,
        SystemPromptSection::SystemInfo,
        SystemPromptSection::Objective,
        SystemPromptSection::UserInstructions,
    ]);
    sections
}

pub fn select_tools(context: &SystemPromptContext) -> Vec<DefaultTool> {
    let mut tools = vec![
        DefaultTool::Bash,
        DefaultTool::FileRead,
        DefaultTool::FileNew,
        DefaultTool::FileEdit,
        DefaultTool::Search,
        DefaultTool::ListFiles,
        DefaultTool::ListCodeDef,
        DefaultTool::Browser,
    ];
    if context.uses_inline_tools() {
        tools.push(DefaultTool::McpUse);
    }
    tools.extend([
        DefaultTool::McpAccess,
        DefaultTool::Ask,
        DefaultTool::Attempt,
        DefaultTool::NewTask,
        DefaultTool::PlanMode,
        DefaultTool::McpDocs,
    ]);
    tools
}
