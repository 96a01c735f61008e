//! Prompt for frontier models with strong agentic capabilities, used when
//! the provider does not have a dedicated native-tool-calling prompt.

mod template;

use super::validated;
use crate::context::{CustomPrompt, SystemPromptContext};
use crate::error::VariantError;
use crate::model_family::{
    is_gpt5_model_family, is_local_model, is_next_gen_model_family, is_next_gen_model_provider,
    ModelFamily,
};
use crate::sections::SystemPromptSection;
use crate::tools::DefaultTool;
use crate::variant::builder::VariantBuilder;
use crate::variant::validator::ValidationOptions;
use crate::variant::{ComponentOverride, Variant};

pub const FAMILY: ModelFamily = ModelFamily::NextGen;

pub fn config(options: &ValidationOptions) -> Result<Variant, VariantError> {
    let variant = VariantBuilder::new(FAMILY)
        .description("Prompt tailored to newer frontier models with smarter agentic capabilities.")
        .version(1)
        .tags(["next-gen", "advanced", "production"])
        .labels([("stable", 1), ("production", 1), ("advanced", 1)])
        .matcher(matches)
        .template(template::BASE)
        .components(select_components)
        .tools(select_tools)
        .placeholders([("MODEL_FAMILY", FAMILY.as_str())])
        .config(serde_json::Map::new())
        .override_component(
            SystemPromptSection::Rules,
            ComponentOverride {
                template: template::RULES,
            },
        )
        .override_component(
            SystemPromptSection::ToolUse,
            ComponentOverride {
                template: template::TOOL_USE,
            },
        )
        .override_component(
            SystemPromptSection::Objective,
            ComponentOverride {
                template: template::OBJECTIVE,
            },
        )
        .override_component(
            SystemPromptSection::ActVsPlan,
            ComponentOverride {
                template: template::ACT_VS_PLAN,
            },
        )
        .override_component(
            SystemPromptSection::Feedback,
            ComponentOverride {
                template: template::FEEDBACK,
            },
        )
        .build()?;

    validated(variant, options)
}

/// Next-gen models always qualify when native tool calls are off. With
/// native calls on, providers that have their own native prompt are left to
/// it, and GPT-5 models without "chat" in the id belong to a more specific
/// GPT-5 prompt.
pub fn matches(context: &SystemPromptContext) -> bool {
    let provider_info = &context.provider_info;
    let model_id = provider_info.model.id.as_str();

    if is_next_gen_model_family(model_id) && !context.enable_native_tool_calls {
        return true;
    }

    !(provider_info.custom_prompt == Some(CustomPrompt::Compact) && is_local_model(provider_info))
        && !is_next_gen_model_provider(provider_info)
        && is_next_gen_model_family(model_id)
        && !(is_gpt5_model_family(model_id) && !model_id.contains("chat"))
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
        SystemPromptSection::CliSubagents,
        SystemPromptSection::Capabilities,
        SystemPromptSection::Feedback,
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
        DefaultTool::WebFetch,
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
        DefaultTool::Todo,
    ]);
    tools
}
