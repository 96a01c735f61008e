use serde::{Deserialize, Serialize};

/// Custom prompt modes a user can select in place of the full prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomPrompt {
    Compact,
}

impl CustomPrompt {
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "compact" => Some(Self::Compact),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelCapabilities {
    /// The model can emit native (API-level) tool calls.
    pub can_use_tools: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub id: String,
    #[serde(default)]
    pub info: ModelCapabilities,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderInfo {
    pub provider_id: String,
    pub model: ModelInfo,
    #[serde(default)]
    pub custom_prompt: Option<CustomPrompt>,
}

/// Snapshot of the active provider/model that every variant decision is
/// made against. Callers build a fresh one per decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemPromptContext {
    pub provider_info: ProviderInfo,
    /// Native tool calling is enabled for this session.
    #[serde(default)]
    pub enable_native_tool_calls: bool,
}

impl Default for ModelCapabilities {
    fn default() -> Self {
        Self {
            can_use_tools: true,
        }
    }
}

impl SystemPromptContext {
    /// A context for a tool-capable model with native tool calls disabled
    /// and no custom prompt.
    pub fn new(provider_id: impl Into<String>, model_id: impl Into<String>) -> Self {
        Self {
            provider_info: ProviderInfo {
                provider_id: provider_id.into(),
                model: ModelInfo {
                    id: model_id.into(),
                    info: ModelCapabilities::default(),
                },
                custom_prompt: None,
            },
            enable_native_tool_calls: false,
        }
    }

    pub fn with_tool_support(mut self, can_use_tools: bool) -> Self {
        self.provider_info.model.info.can_use_tools = can_use_tools;
        self
    }

    pub fn with_native_tool_calls(mut self, enabled: bool) -> Self {
        self.enable_native_tool_calls = enabled;
        self
    }

    pub fn with_custom_prompt(mut self, custom_prompt: Option<CustomPrompt>) -> Self {
        self.provider_info.custom_prompt = custom_prompt;
        self
    }

    pub fn model_id(&self) -> &str {
        &self.provider_info.model.id
    }

    /// Tools must be described and invoked through chat text rather than
    /// native calls. Every selector that pairs guidance with an invocation
    /// tool must branch on this and nothing else.
    pub fn uses_inline_tools(&self) -> bool {
        !(self.provider_info.model.info.can_use_tools && self.enable_native_tool_calls)
    }

    /// Deterministic grid of representative contexts: a mix of local,
    /// native and compatible providers crossed with next-gen, GPT-5 and
    /// older models and every combination of the boolean flags.
    pub fn probe_contexts() -> Vec<SystemPromptContext> {
        const PROVIDERS: &[&str] = &["openai", "anthropic", "ollama"];
        const MODELS: &[&str] = &[
            "claude-sonnet-4-5",
            "gpt-5-chat-latest",
            "gpt-5",
            "gemini-2.5-pro",
            "qwen3-coder",
        ];

        let mut contexts = Vec::new();
        for provider in PROVIDERS {
            for model in MODELS {
                for can_use_tools in [true, false] {
                    for native in [true, false] {
                        for custom_prompt in [None, Some(CustomPrompt::Compact)] {
                            contexts.push(
                                SystemPromptContext::new(*provider, *model)
                                    .with_tool_support(can_use_tools)
                                    .with_native_tool_calls(native)
                                    .with_custom_prompt(custom_prompt),
                            );
                        }
                    }
                }
            }
        }
        contexts
    }
}
