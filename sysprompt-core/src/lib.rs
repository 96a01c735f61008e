pub mod config;
pub mod context;
pub mod error;
pub mod model_family;
pub mod registry;
pub mod sections;
pub mod tools;
pub mod variant;
pub mod variants;

// Public library API - callers resolving prompts should only need these;
// the identifier enums are re-exported because every selector speaks them.
pub use config::{InvalidVariantPolicy, RegistryConfig, DEFAULT_CONFIG_FILE};
pub use context::{CustomPrompt, ModelCapabilities, ModelInfo, ProviderInfo, SystemPromptContext};
pub use error::VariantError;
pub use model_family::ModelFamily;
pub use registry::{initialize_variants, initialize_variants_with, VariantRegistry};
pub use sections::SystemPromptSection;
pub use tools::DefaultTool;
pub use variant::{
    builder::VariantBuilder,
    validator::{validate_variant, ValidationOptions, ValidationResult},
    ComponentOverride, PromptSpec, TemplateRef, Variant,
};
