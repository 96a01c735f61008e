use super::builder::VariantBuilder;
use super::validator::{validate_variant, ValidationOptions};
use super::*;
use crate::error::VariantError;

const BASE: TemplateRef = TemplateRef("test/base");

fn sections(_: &SystemPromptContext) -> Vec<SystemPromptSection> {
    vec![SystemPromptSection::AgentRole, SystemPromptSection::Rules]
}

fn tools(_: &SystemPromptContext) -> Vec<DefaultTool> {
    vec![DefaultTool::Bash, DefaultTool::Attempt]
}

fn complete_builder() -> VariantBuilder {
    VariantBuilder::new(ModelFamily::Generic)
        .description("test variant")
        .tags(["test"])
        .matcher(|ctx| ctx.enable_native_tool_calls)
        .template(BASE)
        .components(sections)
        .tools(tools)
}

#[test]
fn test_build_records_every_attribute() {
    let mut config = serde_json::Map::new();
    config.insert("max_sections".into(), serde_json::json!(4));

    let variant = complete_builder()
        .version(3)
        .labels([("stable", 2)])
        .placeholders([("MODEL_FAMILY", "generic")])
        .config(config)
        .override_component(
            SystemPromptSection::Rules,
            ComponentOverride {
                template: TemplateRef("test/rules"),
            },
        )
        .build()
        .unwrap();

    assert_eq!(variant.family(), ModelFamily::Generic);
    assert_eq!(variant.description(), "test variant");
    assert_eq!(variant.version(), 3);
    assert!(variant.tags().contains("test"));
    assert_eq!(variant.labels().get("stable"), Some(&2));
    assert_eq!(variant.template(), BASE);
    assert_eq!(variant.config().get("max_sections"), Some(&serde_json::json!(4)));
    assert_eq!(
        variant.template_for(SystemPromptSection::Rules),
        TemplateRef("test/rules")
    );
    assert_eq!(variant.template_for(SystemPromptSection::AgentRole), BASE);

    let ctx = SystemPromptContext::new("openai", "gpt-5-chat");
    assert!(!variant.matches(&ctx));
    assert!(variant.matches(&ctx.clone().with_native_tool_calls(true)));
    assert_eq!(variant.select_components(&ctx), sections(&ctx));
    assert_eq!(variant.select_tools(&ctx), tools(&ctx));
}

#[test]
fn test_version_defaults_to_one() {
    let variant = complete_builder().build().unwrap();
    assert_eq!(variant.version(), 1);
}

#[test]
fn test_setters_are_last_write_wins() {
    let variant = complete_builder()
        .description("first")
        .description("second")
        .tags(["a", "b"])
        .tags(["c"])
        .template(TemplateRef("test/other"))
        .build()
        .unwrap();

    assert_eq!(variant.description(), "second");
    assert_eq!(variant.tags().len(), 1);
    assert!(variant.tags().contains("c"));
    assert_eq!(variant.template(), TemplateRef("test/other"));
}

#[test]
fn test_override_component_is_additive_per_section() {
    let variant = complete_builder()
        .override_component(
            SystemPromptSection::Rules,
            ComponentOverride {
                template: TemplateRef("rules/v1"),
            },
        )
        .override_component(
            SystemPromptSection::AgentRole,
            ComponentOverride {
                template: TemplateRef("role"),
            },
        )
        .override_component(
            SystemPromptSection::Rules,
            ComponentOverride {
                template: TemplateRef("rules/v2"),
            },
        )
        .build()
        .unwrap();

    assert_eq!(variant.overrides().len(), 2);
    assert_eq!(
        variant.template_for(SystemPromptSection::Rules),
        TemplateRef("rules/v2")
    );
}

#[test]
fn test_missing_template_is_construction_error() {
    let err = VariantBuilder::new(ModelFamily::NextGen)
        .matcher(|_| true)
        .components(sections)
        .tools(tools)
        .build()
        .unwrap_err();

    assert_eq!(
        err,
        VariantError::MissingAttribute {
            family: ModelFamily::NextGen,
            attribute: "template",
        }
    );
}

#[test]
fn test_missing_selectors_are_construction_errors() {
    let err = VariantBuilder::new(ModelFamily::Generic)
        .template(BASE)
        .matcher(|_| true)
        .tools(tools)
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        VariantError::MissingAttribute {
            attribute: "components",
            ..
        }
    ));

    let err = VariantBuilder::new(ModelFamily::Generic)
        .template(BASE)
        .components(sections)
        .tools(tools)
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        VariantError::MissingAttribute {
            attribute: "matcher",
            ..
        }
    ));
}

#[test]
fn test_resolve_snapshot() {
    let variant = complete_builder()
        .override_component(
            SystemPromptSection::Rules,
            ComponentOverride {
                template: TemplateRef("test/rules"),
            },
        )
        .build()
        .unwrap();
    let spec = variant.resolve(&SystemPromptContext::new("openai", "gpt-5-chat"));

    assert_eq!(spec.family, ModelFamily::Generic);
    assert_eq!(spec.sections, vec![SystemPromptSection::AgentRole, SystemPromptSection::Rules]);
    assert_eq!(spec.tools, vec![DefaultTool::Bash, DefaultTool::Attempt]);
    assert_eq!(
        spec.overrides.get(&SystemPromptSection::Rules),
        Some(&TemplateRef("test/rules"))
    );

    let json = serde_json::to_value(&spec).unwrap();
    assert_eq!(json["family"], "generic");
    assert_eq!(json["sections"][1], "RULES");
    assert_eq!(json["tools"][0], "execute_command");
    assert_eq!(json["overrides"]["RULES"], "test/rules");
}

#[test]
fn test_valid_variant_has_no_errors_or_warnings() {
    let variant = complete_builder().build().unwrap();
    let result = validate_variant(&variant, &ValidationOptions::strict());
    assert!(result.is_valid, "{:?}", result.errors);
    assert!(result.warnings.is_empty(), "{:?}", result.warnings);
}

#[test]
fn test_version_zero_is_invalid() {
    let variant = complete_builder().version(0).build().unwrap();
    let result = validate_variant(&variant, &ValidationOptions::default());
    assert!(!result.is_valid);
    assert_eq!(result.errors, vec!["version must be >= 1, got 0".to_string()]);
}

#[test]
fn test_empty_templates_are_invalid() {
    let variant = complete_builder()
        .template(TemplateRef(""))
        .override_component(
            SystemPromptSection::Rules,
            ComponentOverride {
                template: TemplateRef("  "),
            },
        )
        .build()
        .unwrap();
    let result = validate_variant(&variant, &ValidationOptions::default());
    assert!(!result.is_valid);
    assert_eq!(result.errors.len(), 2);
}

#[test]
fn test_placeholder_names_must_be_upper_snake_case() {
    let variant = complete_builder()
        .placeholders([("modelFamily", "x"), ("MODEL_FAMILY", "y"), ("1ST", "z")])
        .build()
        .unwrap();
    let result = validate_variant(&variant, &ValidationOptions::default());
    assert_eq!(result.errors.len(), 2);
    assert!(result.errors.iter().any(|e| e.contains("'modelFamily'")));
    assert!(result.errors.iter().any(|e| e.contains("'1ST'")));
}

#[test]
fn test_advisory_warnings() {
    let variant = VariantBuilder::new(ModelFamily::Generic)
        .labels([("experimental", 0)])
        .matcher(|_| true)
        .template(BASE)
        .components(sections)
        .tools(tools)
        .build()
        .unwrap();
    let result = validate_variant(&variant, &ValidationOptions::default());
    assert!(result.is_valid);
    assert_eq!(result.warnings.len(), 3);
}

#[test]
fn test_strict_rejects_duplicate_sections() {
    let variant = complete_builder()
        .components(|_| vec![SystemPromptSection::Rules, SystemPromptSection::Rules])
        .build()
        .unwrap();

    assert!(validate_variant(&variant, &ValidationOptions::default()).is_valid);

    let result = validate_variant(&variant, &ValidationOptions::strict());
    assert!(!result.is_valid);
    assert_eq!(
        result.errors,
        vec!["component selector returned RULES more than once".to_string()]
    );
}

#[test]
fn test_strict_rejects_unpaired_inline_tool_entries() {
    let variant = complete_builder()
        .components(|ctx| {
            let mut sections = vec![SystemPromptSection::AgentRole];
            if ctx.uses_inline_tools() {
                sections.push(SystemPromptSection::Mcp);
            }
            sections
        })
        .build()
        .unwrap();

    let result = validate_variant(&variant, &ValidationOptions::strict());
    assert!(!result.is_valid);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains("must be selected together"));
}

#[test]
fn test_strict_rejects_empty_tool_list() {
    let variant = complete_builder().tools(|_| Vec::new()).build().unwrap();
    let result = validate_variant(&variant, &ValidationOptions::strict());
    assert!(!result.is_valid);
    assert!(result.errors[0].starts_with("tool selector returned no tools"));
}

#[test]
fn test_strict_warns_on_unused_override() {
    let variant = complete_builder()
        .override_component(
            SystemPromptSection::Feedback,
            ComponentOverride {
                template: TemplateRef("test/feedback"),
            },
        )
        .build()
        .unwrap();
    let result = validate_variant(&variant, &ValidationOptions::strict());
    assert!(result.is_valid);
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].contains("FEEDBACK"));
}
