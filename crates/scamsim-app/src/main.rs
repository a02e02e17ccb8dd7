mod cli;
mod console;
mod feedback;
mod onboarding;
mod trainer;

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use scamsim_ai::{AiClient, GeminiClient, GeminiConfig};
use scamsim_common::ScamsimError;
use scamsim_config::schema::{ApiConfig, LogLevel};
use scamsim_config::{CredentialStore, ScamsimConfig};
use tokio::io::BufReader;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

use crate::console::Console;
use crate::trainer::Trainer;

const DEFAULT_LOG_DIRECTIVE: &str = "scamsim=info";

type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Load environment variables from a .env file (KEY=VALUE lines).
fn load_dotenv() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        // Current directory
        PathBuf::from(".env"),
        // Workspace root, two levels up from crates/scamsim-app/
        manifest_dir.join("..").join("..").join(".env"),
    ];

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"').trim_matches('\'');
                    if std::env::var(key).is_err() {
                        std::env::set_var(key, value);
                    }
                }
            }
            return;
        }
    }
}

/// `RUST_LOG` plus a `scamsim=<level>` directive.
fn log_filter(level: Option<LogLevel>) -> EnvFilter {
    let directive = level
        .map(|l| format!("scamsim={}", l.as_filter()))
        .unwrap_or_else(|| DEFAULT_LOG_DIRECTIVE.to_string());
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = directive.parse::<Directive>() {
        filter = filter.add_directive(directive);
    }
    filter
}

/// Install the stderr subscriber. The returned handle swaps the filter once
/// the config file has been read.
fn init_logging(level: Option<LogLevel>) -> FilterHandle {
    let (filter, handle) = reload::Layer::new(log_filter(level));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
    handle
}

fn gemini_config(api_key: String, api: &ApiConfig) -> GeminiConfig {
    let mut config = GeminiConfig::new(api_key)
        .with_base_url(api.base_url.clone())
        .with_timeouts(
            Duration::from_secs(api.connect_timeout_secs.into()),
            Duration::from_secs(api.request_timeout_secs.into()),
        );
    if let Some(t) = api.temperature {
        config = config.with_temperature(t);
    }
    if let Some(n) = api.max_output_tokens {
        config = config.with_max_output_tokens(n);
    }
    config
}

async fn run(args: cli::Args, config: ScamsimConfig) -> Result<(), ScamsimError> {
    let store = CredentialStore::default_location()?;
    if args.forget_key {
        store.clear()?;
        println!("Stored API key removed ({}).", store.path().display());
        return Ok(());
    }

    let mut console = Console::new(BufReader::new(tokio::io::stdin()), std::io::stdout());
    console.say("Scam simulator: learn to spot fraud by talking to one.")?;
    console.blank()?;

    let api_key = onboarding::obtain_api_key(&mut console, &store).await?;
    let client = GeminiClient::new(gemini_config(api_key, &config.api))?;
    let client: Arc<dyn AiClient> = Arc::new(client);

    let scenarios =
        scamsim_config::load_catalog(&config.scenarios, args.scenarios.as_deref().map(Path::new))?;
    tracing::info!("{} scenarios loaded", scenarios.len());

    let Some(profile) = onboarding::ask_profile(&mut console).await? else {
        return Ok(());
    };

    Trainer::new(client, config, scenarios, profile)
        .with_ansi(std::io::stdout().is_terminal())
        .run(&mut console)
        .await?;

    console.say("Goodbye.")?;
    Ok(())
}

fn main() -> ExitCode {
    load_dotenv();

    let args = cli::parse();

    let log_filter_handle = init_logging(args.log_level);

    tracing::info!("scamsim v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    let config = scamsim_config::load_config(args.config.as_deref().map(Path::new))
        .unwrap_or_else(|e| {
            tracing::warn!("Config load failed, using defaults: {e}");
            ScamsimConfig::default()
        });

    // The command line wins over the config file.
    if args.log_level.is_none() {
        if let Err(e) = log_filter_handle.reload(log_filter(Some(config.logging.level))) {
            tracing::warn!("Failed to apply configured log level: {e}");
        }
    }
    tracing::info!(
        "Config loaded (default model: {}, {} preferred)",
        config.api.default_model,
        config.api.preferred_models.len()
    );

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("error: failed to start runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(args, config)) {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
