use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use sysprompt_core::{
    CustomPrompt, RegistryConfig, SystemPromptContext, VariantRegistry, DEFAULT_CONFIG_FILE,
};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sysprompt")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Resolve which system prompt variant applies to a provider/model")]
struct Args {
    /// Provider id, e.g. anthropic, openrouter, ollama
    #[arg(long, default_value = "openai")]
    provider: String,

    /// Model id as reported by the provider
    #[arg(long, required_unless_present_any = ["list", "schema"])]
    model: Option<String>,

    /// The model cannot emit native tool calls
    #[arg(long)]
    no_tool_support: bool,

    /// Native tool calling is enabled for the session
    #[arg(long)]
    native_tool_calls: bool,

    /// Custom prompt mode (only "compact" is known)
    #[arg(long, value_name = "MODE", value_parser = parse_custom_prompt)]
    custom_prompt: Option<CustomPrompt>,

    /// Registry configuration file (TOML); defaults to ./sysprompt.toml if present
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print registered variant families in selection order and exit
    #[arg(long)]
    list: bool,

    /// Print the JSON schema of the registry configuration and exit
    #[arg(long)]
    schema: bool,
}

impl Args {
    fn context(&self, model: &str) -> SystemPromptContext {
        SystemPromptContext::new(&self.provider, model)
            .with_tool_support(!self.no_tool_support)
            .with_native_tool_calls(self.native_tool_calls)
            .with_custom_prompt(self.custom_prompt)
    }

    /// A named config file must exist; the implicit one is optional.
    fn load_config(&self) -> Result<RegistryConfig> {
        match &self.config {
            Some(path) => RegistryConfig::from_path(path),
            None => RegistryConfig::from_path_or_default(Path::new(DEFAULT_CONFIG_FILE)),
        }
    }
}

fn parse_custom_prompt(s: &str) -> Result<CustomPrompt, String> {
    CustomPrompt::from_name(s).ok_or_else(|| format!("unknown custom prompt mode: {s}"))
}

fn main() -> Result<()> {
    setup_tracing()?;

    let args = Args::parse();

    if args.schema {
        let schema = schemars::schema_for!(RegistryConfig);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }

    let config = args.load_config()?;
    info!("Registry config: {config:?}");

    let registry = VariantRegistry::initialize(&config)?;

    if args.list {
        for family in registry.families() {
            let variant = registry
                .get(family)
                .context("registered family has no variant")?;
            println!("{family}\tv{}\t{}", variant.version(), variant.description());
        }
        return Ok(());
    }

    let model = args
        .model
        .as_deref()
        .context("--model is required")?;
    let context = args.context(model);
    let spec = registry.resolve(&context).with_context(|| {
        format!(
            "No variant matched provider={} model={}",
            context.provider_info.provider_id, model
        )
    })?;

    println!("{}", serde_json::to_string_pretty(&spec)?);
    Ok(())
}

fn setup_tracing() -> Result<()> {
    use tracing_subscriber::fmt;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout carries the JSON result, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init()?;

    Ok(())
}
