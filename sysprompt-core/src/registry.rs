use tracing::{debug, info, warn};

use crate::config::{InvalidVariantPolicy, RegistryConfig};
use crate::context::SystemPromptContext;
use crate::error::VariantError;
use crate::model_family::ModelFamily;
use crate::variant::validator::ValidationOptions;
use crate::variant::{PromptSpec, Variant};
use crate::variants::{self, VariantFactory};

/// Builds and validates every enabled built-in variant, in precedence
/// order. Each family's outcome is reported separately so callers decide
/// whether one bad family is fatal.
pub fn initialize_variants(
    config: &RegistryConfig,
) -> Vec<(ModelFamily, Result<Variant, VariantError>)> {
    initialize_variants_with(config, &variants::builtin())
}

/// Same as [`initialize_variants`] over an explicit factory list, tried in
/// the given order.
pub fn initialize_variants_with(
    config: &RegistryConfig,
    factories: &[(ModelFamily, VariantFactory)],
) -> Vec<(ModelFamily, Result<Variant, VariantError>)> {
    let options = ValidationOptions {
        strict: config.strict_validation,
    };

    factories
        .iter()
        .copied()
        .filter(|(family, _)| {
            let disabled = config.is_disabled(*family);
            if disabled {
                warn!("Variant family {family} disabled by configuration");
            }
            !disabled
        })
        .map(|(family, factory)| (family, factory(&options)))
        .collect()
}

/// Ordered, read-only set of variants. Selection tries each variant's
/// matcher in registration order and the first match wins.
#[derive(Debug, Clone)]
pub struct VariantRegistry {
    variants: Vec<Variant>,
}

impl VariantRegistry {
    pub fn initialize(config: &RegistryConfig) -> Result<Self, VariantError> {
        Self::initialize_with(config, &variants::builtin())
    }

    /// Builds a registry from `factories`, applying `config.on_invalid` to
    /// any family that fails to build or validate.
    pub fn initialize_with(
        config: &RegistryConfig,
        factories: &[(ModelFamily, VariantFactory)],
    ) -> Result<Self, VariantError> {
        let mut variants = Vec::new();

        for (family, result) in initialize_variants_with(config, factories) {
            match result {
                Ok(variant) => variants.push(variant),
                Err(e) => match config.on_invalid {
                    InvalidVariantPolicy::Abort => return Err(e),
                    InvalidVariantPolicy::Disable => {
                        warn!("Disabling variant family {family}: {e}");
                    }
                },
            }
        }

        let registry = Self::from_variants(variants);
        info!(
            "Variant registry initialized: {:?}",
            registry.families().collect::<Vec<_>>()
        );
        Ok(registry)
    }

    /// Registers `variants` in the given order. A later variant of a family
    /// already present is ignored so each family keys exactly one variant.
    pub fn from_variants(variants: Vec<Variant>) -> Self {
        let mut registered: Vec<Variant> = Vec::with_capacity(variants.len());
        for variant in variants {
            if registered.iter().any(|v| v.family() == variant.family()) {
                warn!(
                    "Ignoring duplicate variant for family {}",
                    variant.family()
                );
                continue;
            }
            registered.push(variant);
        }
        Self {
            variants: registered,
        }
    }

    pub fn get(&self, family: ModelFamily) -> Option<&Variant> {
        self.variants.iter().find(|v| v.family() == family)
    }

    pub fn families(&self) -> impl Iterator<Item = ModelFamily> + '_ {
        self.variants.iter().map(Variant::family)
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    pub fn select(&self, context: &SystemPromptContext) -> Option<&Variant> {
        let selected = self.variants.iter().find(|v| v.matches(context));
        debug!(
            "Selected variant {:?} for provider={} model={} native_tool_calls={}",
            selected.map(Variant::family),
            context.provider_info.provider_id,
            context.model_id(),
            context.enable_native_tool_calls
        );
        selected
    }

    pub fn resolve(&self, context: &SystemPromptContext) -> Option<PromptSpec> {
        self.select(context).map(|v| v.resolve(context))
    }
}
