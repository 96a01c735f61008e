use std::collections::HashSet;
use std::hash::Hash;

use super::Variant;
use crate::context::SystemPromptContext;
use crate::sections::SystemPromptSection;
use crate::tools::DefaultTool;

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationOptions {
    /// Also exercise the selectors over
    /// [`SystemPromptContext::probe_contexts`] and check their output.
    pub strict: bool,
}

impl ValidationOptions {
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Checks a built variant for structural consistency. Errors make the
/// variant unusable; warnings are advisory.
pub fn validate_variant(variant: &Variant, options: &ValidationOptions) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if variant.version() < 1 {
        errors.push(format!("version must be >= 1, got {}", variant.version()));
    }

    if variant.template().is_empty() {
        errors.push("base template reference is empty".to_string());
    }

    for (section, component) in variant.overrides() {
        if component.template.is_empty() {
            errors.push(format!("override for {section} has an empty template reference"));
        }
    }

    for name in variant.placeholders().keys() {
        if !is_valid_placeholder_name(name) {
            errors.push(format!(
                "placeholder '{name}' must be UPPER_SNAKE_CASE (A-Z, 0-9, _)"
            ));
        }
    }

    if variant.description().trim().is_empty() {
        warnings.push("description is empty".to_string());
    }

    if variant.tags().is_empty() {
        warnings.push("no tags set".to_string());
    }

    for (label, weight) in variant.labels() {
        if *weight == 0 {
            warnings.push(format!("label '{label}' has zero weight"));
        }
    }

    if options.strict {
        probe_selectors(variant, &mut errors, &mut warnings);
    }

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
        warnings,
    }
}

fn probe_selectors(variant: &Variant, errors: &mut Vec<String>, warnings: &mut Vec<String>) {
    let mut emitted: HashSet<SystemPromptSection> = HashSet::new();
    let mut seen_errors: HashSet<String> = HashSet::new();
    let mut report = |message: String| {
        if seen_errors.insert(message.clone()) {
            errors.push(message);
        }
    };

    for context in SystemPromptContext::probe_contexts() {
        let sections = variant.select_components(&context);
        let tools = variant.select_tools(&context);
        let model = context.model_id();

        if sections.is_empty() {
            report(format!("component selector returned no sections for '{model}'"));
        }
        if tools.is_empty() {
            report(format!("tool selector returned no tools for '{model}'"));
        }
        if let Some(dup) = first_duplicate(&sections) {
            report(format!("component selector returned {dup} more than once"));
        }
        if let Some(dup) = first_duplicate(&tools) {
            report(format!("tool selector returned {dup} more than once"));
        }

        let has_guidance = sections.contains(&SystemPromptSection::Mcp);
        let has_invocation = tools.contains(&DefaultTool::McpUse);
        if has_guidance != has_invocation {
            report(format!(
                "{} section and {} tool must be selected together (section: {has_guidance}, tool: {has_invocation})",
                SystemPromptSection::Mcp,
                DefaultTool::McpUse,
            ));
        }

        emitted.extend(sections);
    }

    for section in variant.overrides().keys() {
        if !emitted.contains(section) {
            warnings.push(format!(
                "override for {section} is never used: the component selector does not emit it"
            ));
        }
    }
}

fn first_duplicate<T: Copy + Eq + Hash>(items: &[T]) -> Option<T> {
    let mut seen = HashSet::new();
    items.iter().copied().find(|item| !seen.insert(*item))
}

fn is_valid_placeholder_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with(|c: char| c.is_ascii_digit())
        && name
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}
