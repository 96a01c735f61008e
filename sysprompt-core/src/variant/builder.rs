use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use super::{ComponentOverride, ComponentsFn, Matcher, TemplateRef, ToolsFn, Variant};
use crate::context::SystemPromptContext;
use crate::error::VariantError;
use crate::model_family::ModelFamily;
use crate::sections::SystemPromptSection;
use crate::tools::DefaultTool;

/// Accumulates the attributes of a [`Variant`].
///
/// Every setter overwrites the previous value except
/// [`override_component`](Self::override_component), which adds or replaces
/// a single entry. `build` consumes the builder, so a builder yields at most
/// one variant.
pub struct VariantBuilder {
    family: ModelFamily,
    description: String,
    version: u32,
    tags: BTreeSet<String>,
    labels: BTreeMap<String, u32>,
    template: Option<TemplateRef>,
    overrides: BTreeMap<SystemPromptSection, ComponentOverride>,
    placeholders: BTreeMap<String, String>,
    config: serde_json::Map<String, serde_json::Value>,
    matcher: Option<Matcher>,
    components: Option<ComponentsFn>,
    tools: Option<ToolsFn>,
}

impl VariantBuilder {
    pub fn new(family: ModelFamily) -> Self {
        Self {
            family,
            description: String::new(),
            version: 1,
            tags: BTreeSet::new(),
            labels: BTreeMap::new(),
            template: None,
            overrides: BTreeMap::new(),
            placeholders: BTreeMap::new(),
            config: serde_json::Map::new(),
            matcher: None,
            components: None,
            tools: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Label weights are opaque here; the registry's consumers rank and
    /// report on them.
    pub fn labels<I, K>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = (K, u32)>,
        K: Into<String>,
    {
        self.labels = labels.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self
    }

    pub fn matcher<F>(mut self, matcher: F) -> Self
    where
        F: Fn(&SystemPromptContext) -> bool + Send + Sync + 'static,
    {
        self.matcher = Some(Arc::new(matcher));
        self
    }

    pub fn template(mut self, template: TemplateRef) -> Self {
        self.template = Some(template);
        self
    }

    pub fn components<F>(mut self, components: F) -> Self
    where
        F: Fn(&SystemPromptContext) -> Vec<SystemPromptSection> + Send + Sync + 'static,
    {
        self.components = Some(Arc::new(components));
        self
    }

    pub fn tools<F>(mut self, tools: F) -> Self
    where
        F: Fn(&SystemPromptContext) -> Vec<DefaultTool> + Send + Sync + 'static,
    {
        self.tools = Some(Arc::new(tools));
        self
    }

    pub fn placeholders<I, K, V>(mut self, placeholders: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.placeholders = placeholders
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    pub fn config(mut self, config: serde_json::Map<String, serde_json::Value>) -> Self {
        self.config = config;
        self
    }

    pub fn override_component(
        mut self,
        section: SystemPromptSection,
        component: ComponentOverride,
    ) -> Self {
        self.overrides.insert(section, component);
        self
    }

    /// Freezes the accumulated attributes. Performs no validation beyond
    /// checking that the required attributes were supplied; run
    /// [`validate_variant`](super::validator::validate_variant) on the
    /// result.
    pub fn build(self) -> Result<Variant, VariantError> {
        let family = self.family;
        let missing = |attribute| VariantError::MissingAttribute { family, attribute };

        let template = self.template.ok_or_else(|| missing("template"))?;
        let matcher = self.matcher.ok_or_else(|| missing("matcher"))?;
        let components = self.components.ok_or_else(|| missing("components"))?;
        let tools = self.tools.ok_or_else(|| missing("tools"))?;

        Ok(Variant {
            family,
            description: self.description,
            version: self.version,
            tags: self.tags,
            labels: self.labels,
            template,
            overrides: self.overrides,
            placeholders: self.placeholders,
            config: self.config,
            matcher,
            components,
            tools,
        })
    }
}
