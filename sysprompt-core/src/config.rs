//! Registry configuration.
//!
//! Loaded from TOML by embedders (and by the CLI's `--config`). Every field
//! has a default so an empty or missing file yields the standard registry.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model_family::ModelFamily;

/// Config file picked up from the working directory when none is named.
pub const DEFAULT_CONFIG_FILE: &str = "sysprompt.toml";

fn default_strict_validation() -> bool {
    true
}

/// What initialization does when a family's variant fails to build or
/// validate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum InvalidVariantPolicy {
    /// Fail initialization of the whole registry.
    #[default]
    Abort,
    /// Log the failure and leave that family out of the registry.
    Disable,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Variant Registry")]
pub struct RegistryConfig {
    /// Probe every variant's selectors over a grid of representative
    /// contexts during validation.
    #[serde(default = "default_strict_validation")]
    #[schemars(default = "default_strict_validation")]
    pub strict_validation: bool,
    #[serde(default)]
    pub on_invalid: InvalidVariantPolicy,
    /// Families that are never built or registered.
    #[serde(default)]
    pub disabled_families: Vec<ModelFamily>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            strict_validation: default_strict_validation(),
            on_invalid: InvalidVariantPolicy::default(),
            disabled_families: Vec::new(),
        }
    }
}

impl RegistryConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse registry config")
    }

    /// Reads the config at `path`. The file must exist.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read registry config: {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("Invalid registry config: {}", path.display()))
    }

    /// Reads the config at an implicit location, where a missing file means
    /// defaults.
    pub fn from_path_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::from_path(path)
    }

    pub fn is_disabled(&self, family: ModelFamily) -> bool {
        self.disabled_families.contains(&family)
    }
}
