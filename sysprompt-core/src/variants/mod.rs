pub mod generic;
pub mod next_gen;

use tracing::{error, warn};

use crate::error::VariantError;
use crate::model_family::ModelFamily;
use crate::variant::validator::{validate_variant, ValidationOptions};
use crate::variant::Variant;

pub type VariantFactory = fn(&ValidationOptions) -> Result<Variant, VariantError>;

/// Built-in variants in selection precedence order. The registry tries
/// matchers in this order and the first match wins, so more specific
/// families must come before catch-alls.
pub fn builtin() -> Vec<(ModelFamily, VariantFactory)> {
    vec![
        (next_gen::FAMILY, next_gen::config as VariantFactory),
        (generic::FAMILY, generic::config as VariantFactory),
    ]
}

/// Runs the validator over a freshly built variant, logging warnings and
/// turning errors into [`VariantError::Invalid`]. Factories outside this
/// crate use it to get the same fail-fast behavior as the built-ins.
pub fn validated(
    variant: Variant,
    options: &ValidationOptions,
) -> Result<Variant, VariantError> {
    let family = variant.family();
    let result = validate_variant(&variant, options);

    if !result.is_valid {
        error!(
            "{family} variant configuration validation failed: {:?}",
            result.errors
        );
        return Err(VariantError::Invalid {
            family,
            errors: result.errors,
        });
    }

    for warning in &result.warnings {
        warn!("{family} variant configuration warning: {warning}");
    }

    Ok(variant)
}
