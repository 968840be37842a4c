/// Print the market board once
/// Usage: cargo run --bin show_market_status -- [--json] [--at 2026-01-16T21:00:00Z]
use clap::Parser;
use market_clock::config::{build_calendars, load_config_or_default};
use market_clock::display::{render_board, snapshot};
use market_clock::time::{Clock, FixedClock, SystemClock};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Print the status of every configured market once
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print a JSON snapshot instead of the text board
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Evaluate at this RFC 3339 instant instead of now
    #[arg(long)]
    at: Option<String>,

    /// Configuration file path
    #[arg(short, long, env = "CONFIG_PATH", default_value = "config.toml")]
    config: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let (config, source) = load_config_or_default(&args.config)?;
    info!("Configuration loaded from {}", source);
    let calendars = build_calendars(&config)?;

    let now = match &args.at {
        Some(value) => FixedClock::parse(value)?.now(),
        None => SystemClock.now(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot(&calendars, now))?);
    } else {
        println!("{}", render_board(&calendars, now, &chrono::Local));
    }

    Ok(())
}
