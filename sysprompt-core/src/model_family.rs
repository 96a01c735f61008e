use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::context::ProviderInfo;

/// Registry key for a prompt variant. Each family owns at most one
/// registered `Variant`.
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
    JsonSchema,
    strum::VariantArray,
)]
#[serde(rename_all = "kebab-case")]
pub enum ModelFamily {
    NextGen,
    Generic,
}

impl ModelFamily {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NextGen => "next-gen",
            Self::Generic => "generic",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "next-gen" => Some(Self::NextGen),
            "generic" => Some(Self::Generic),
            _ => None,
        }
    }
}

impl std::fmt::Display for ModelFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Providers that are served by their own native-tool-calling prompt
/// variant and therefore never pick up the text-based next-gen prompt on
/// their own.
const NEXT_GEN_NATIVE_PROVIDERS: &[&str] = &[
    "anthropic",
    "bedrock",
    "cline",
    "gemini",
    "openai-native",
    "openrouter",
    "vertex",
    "xai",
];

const LOCAL_PROVIDERS: &[&str] = &["ollama", "lmstudio"];

/// Lowercases the id and drops any `vendor/` routing prefix, so
/// `anthropic/Claude-Sonnet-4.5` and `claude-sonnet-4.5` classify alike.
fn normalize(id: &str) -> String {
    let lower = id.trim().to_lowercase();
    match lower.rsplit_once('/') {
        Some((_, model)) => model.to_string(),
        None => lower,
    }
}

fn contains_any(id: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| id.contains(n))
}

pub fn is_gpt5_model_family(id: &str) -> bool {
    contains_any(&normalize(id), &["gpt-5", "gpt5"])
}

pub fn is_claude4_plus_model_family(id: &str) -> bool {
    let id = normalize(id);
    id.contains("claude")
        && contains_any(
            &id,
            &[
                "sonnet-4", "opus-4", "haiku-4", "claude-4", "4-5-sonnet", "4-sonnet", "4-opus",
            ],
        )
}

pub fn is_gemini_next_model_family(id: &str) -> bool {
    contains_any(&normalize(id), &["gemini-2.5", "gemini-2-5", "gemini-3"])
}

pub fn is_grok4_model_family(id: &str) -> bool {
    contains_any(&normalize(id), &["grok-4", "grok-code"])
}

pub fn is_open_weight_next_gen_model_family(id: &str) -> bool {
    contains_any(
        &normalize(id),
        &["glm-4.6", "glm-4-6", "glm-5", "kimi-k2", "minimax-m2"],
    )
}

/// Frontier models capable of the agentic behavior the next-gen prompt
/// assumes.
pub fn is_next_gen_model_family(id: &str) -> bool {
    is_claude4_plus_model_family(id)
        || is_gemini_next_model_family(id)
        || is_grok4_model_family(id)
        || is_gpt5_model_family(id)
        || is_open_weight_next_gen_model_family(id)
}

pub fn is_local_model(provider: &ProviderInfo) -> bool {
    LOCAL_PROVIDERS.contains(&normalize(&provider.provider_id).as_str())
}

pub fn is_next_gen_model_provider(provider: &ProviderInfo) -> bool {
    NEXT_GEN_NATIVE_PROVIDERS.contains(&normalize(&provider.provider_id).as_str())
}
