/// Main entry point for the market clock
use clap::Parser;
use std::io::Write;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use market_clock::{
    config::{build_calendars, load_config_or_default},
    display::render_board,
    error::Result,
    time::{Clock, SystemClock},
    Config, TradingCalendar,
};

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

/// Live board of world stock exchange sessions
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, env = "CONFIG_PATH", default_value = "config.toml")]
    config: String,
}

/// Application state
pub struct MarketClockApp<C: Clock> {
    config: Config,
    calendars: Vec<TradingCalendar>,
    clock: C,
}

impl MarketClockApp<SystemClock> {
    pub fn new(config_path: &str) -> Result<Self> {
        let (config, source) = load_config_or_default(config_path)?;

        // Initialize logging; RUST_LOG wins over the config file
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str())),
            )
            .with_writer(std::io::stderr)
            .init();

        info!("Starting market clock...");
        info!("Configuration loaded from {}", source);

        let calendars = build_calendars(&config)?;

        Ok(MarketClockApp::with_clock(config, calendars, SystemClock))
    }
}

impl<C: Clock> MarketClockApp<C> {
    pub fn with_clock(config: Config, calendars: Vec<TradingCalendar>, clock: C) -> Self {
        MarketClockApp {
            config,
            calendars,
            clock,
        }
    }

    /// Redraw the board every tick until Ctrl+C
    pub async fn run(&self) -> Result<()> {
        let mut ticker = tokio::time::interval(Duration::from_millis(self.config.tick_interval_ms));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let shutdown = tokio::signal::ctrl_c();
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if let Err(e) = self.render() {
                        error!("Render failed: {} ({})", e, e.error_code());
                        if e.is_fatal() {
                            return Err(e);
                        }
                        warn!("Skipping frame");
                    }
                }
                signal = &mut shutdown => {
                    if let Err(e) = signal {
                        error!("Failed to listen for Ctrl+C: {}", e);
                    }
                    info!("Ctrl+C received - shutting down");
                    break;
                }
            }
        }

        Ok(())
    }

    /// Board text for the clock's current instant
    fn frame(&self) -> String {
        render_board(&self.calendars, self.clock.now(), &chrono::Local)
    }

    fn render(&self) -> Result<()> {
        let board = self.frame();

        let mut stdout = std::io::stdout().lock();
        if self.config.clear_screen {
            write!(stdout, "{}", CLEAR_SCREEN)?;
        }
        writeln!(stdout, "{}", board)?;
        stdout.flush()?;

        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let app = MarketClockApp::new(&args.config)?;

    app.run().await?;

    Ok(())
}
