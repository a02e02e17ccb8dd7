use clap::Parser;
use scamsim_config::schema::LogLevel;

/// scamsim: practice spotting scams by chatting with a simulated scammer.
#[derive(Parser, Debug)]
#[command(name = "scamsim", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Scenario JSON file, replacing the configured/built-in catalog.
    #[arg(long)]
    pub scenarios: Option<String>,

    /// Log level override (debug, info, warning, error).
    #[arg(long)]
    pub log_level: Option<LogLevel>,

    /// Delete the stored API key and exit.
    #[arg(long)]
    pub forget_key: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
