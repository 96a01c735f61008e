pub mod builder;
pub mod validator;

#[cfg(test)]
mod tests;

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use serde::Serialize;

use crate::context::SystemPromptContext;
use crate::model_family::ModelFamily;
use crate::sections::SystemPromptSection;
use crate::tools::DefaultTool;

/// Opaque key of a template resolved by the rendering engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TemplateRef(pub &'static str);

impl TemplateRef {
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

/// Replaces the base template's handling of one section. Sections without
/// an override keep whatever the base template does for them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ComponentOverride {
    pub template: TemplateRef,
}

pub type Matcher = Arc<dyn Fn(&SystemPromptContext) -> bool + Send + Sync>;
pub type ComponentsFn = Arc<dyn Fn(&SystemPromptContext) -> Vec<SystemPromptSection> + Send + Sync>;
pub type ToolsFn = Arc<dyn Fn(&SystemPromptContext) -> Vec<DefaultTool> + Send + Sync>;

/// One complete prompt configuration for a class of models.
///
/// Produced by [`builder::VariantBuilder`] and read-only afterwards; there is
/// no API that mutates a built variant. Cloning shares the selector
/// closures.
#[derive(Clone)]
pub struct Variant {
    family: ModelFamily,
    description: String,
    version: u32,
    tags: BTreeSet<String>,
    labels: BTreeMap<String, u32>,
    template: TemplateRef,
    overrides: BTreeMap<SystemPromptSection, ComponentOverride>,
    placeholders: BTreeMap<String, String>,
    config: serde_json::Map<String, serde_json::Value>,
    matcher: Matcher,
    components: ComponentsFn,
    tools: ToolsFn,
}

impl Variant {
    pub fn family(&self) -> ModelFamily {
        self.family
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    pub fn labels(&self) -> &BTreeMap<String, u32> {
        &self.labels
    }

    pub fn template(&self) -> TemplateRef {
        self.template
    }

    pub fn overrides(&self) -> &BTreeMap<SystemPromptSection, ComponentOverride> {
        &self.overrides
    }

    pub fn placeholders(&self) -> &BTreeMap<String, String> {
        &self.placeholders
    }

    pub fn config(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.config
    }

    pub fn matches(&self, context: &SystemPromptContext) -> bool {
        (self.matcher)(context)
    }

    pub fn select_components(&self, context: &SystemPromptContext) -> Vec<SystemPromptSection> {
        (self.components)(context)
    }

    pub fn select_tools(&self, context: &SystemPromptContext) -> Vec<DefaultTool> {
        (self.tools)(context)
    }

    /// The template the renderer should use for `section`.
    pub fn template_for(&self, section: SystemPromptSection) -> TemplateRef {
        self.overrides
            .get(&section)
            .map(|o| o.template)
            .unwrap_or(self.template)
    }

    /// Snapshot of everything the renderer needs for this context. Does not
    /// consult the matcher; callers pick the variant first.
    pub fn resolve(&self, context: &SystemPromptContext) -> PromptSpec {
        PromptSpec {
            family: self.family,
            version: self.version,
            description: self.description.clone(),
            template: self.template,
            sections: self.select_components(context),
            tools: self.select_tools(context),
            overrides: self
                .overrides
                .iter()
                .map(|(section, o)| (*section, o.template))
                .collect(),
            placeholders: self.placeholders.clone(),
            labels: self.labels.clone(),
            tags: self.tags.clone(),
        }
    }
}

impl std::fmt::Debug for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Variant")
            .field("family", &self.family)
            .field("description", &self.description)
            .field("version", &self.version)
            .field("tags", &self.tags)
            .field("labels", &self.labels)
            .field("template", &self.template)
            .field("overrides", &self.overrides)
            .field("placeholders", &self.placeholders)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// A variant materialized against one context.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromptSpec {
    pub family: ModelFamily,
    pub version: u32,
    pub description: String,
    pub template: TemplateRef,
    pub sections: Vec<SystemPromptSection>,
    pub tools: Vec<DefaultTool>,
    pub overrides: BTreeMap<SystemPromptSection, TemplateRef>,
    pub placeholders: BTreeMap<String, String>,
    pub labels: BTreeMap<String, u32>,
    pub tags: BTreeSet<String>,
}
