//! Glidepath - animated onboarding tours in the terminal.
//!
//! Responsibilities:
//! - Orchestrate startup and shutdown.
//! - Initialize file logging, configuration, and the terminal session.
//! - Run the main event loop, pacing frames while the pointer animates.
//!
//! Does NOT handle:
//! - Tour sequencing or pointer animation (see `flow` and `pointer`).
//! - Screen layout (see `runtime::demo`).
//!
//! Invariants:
//! - `check` never touches the terminal or the log directory.
//! - `load_dotenv()` is called at startup to support `.env` configuration.
//! - Configuration precedence: CLI args > env vars > config file > defaults.
//! - Mouse capture is enabled by default unless `--no-mouse` is specified.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures_util::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use glidepath::cli::{Cli, Command};
use glidepath::flow::Tour;
use glidepath::page::CellMetrics;
use glidepath::runtime::{DemoApp, TerminalGuard, default_tour};
use glidepath::scheduler::{Scheduler, SystemScheduler};
use glidepath_config::ConfigLoader;
use glidepath_config::constants::{DEFAULT_FRAME_INTERVAL_MS, DEFAULT_IDLE_TICK_MS};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Command::Check { tour }) = &cli.command {
        let loaded = Tour::load(tour)?;
        println!("{}: {} steps", tour.display(), loaded.len());
        return Ok(());
    }

    // Create logs directory if it doesn't exist
    std::fs::create_dir_all(&cli.log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, "glidepath.log");
    let (non_blocking, _guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking))
        .init();
    // Note: _guard must live for entire main() duration to ensure logs are flushed

    let config = load_config(&cli)?;
    let steps = match &cli.tour {
        Some(path) => Tour::load(path)?.into_steps(),
        None => default_tour(),
    };
    tracing::info!(steps = steps.len(), "Starting glidepath");

    let _terminal_guard = TerminalGuard::enter(cli.no_mouse)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;

    let scheduler = SystemScheduler::new();
    let shared: Arc<dyn Scheduler> = scheduler.clone();
    let mut app = DemoApp::new(shared, config, steps, cell_metrics());

    let frame_interval = Duration::from_millis(DEFAULT_FRAME_INTERVAL_MS);
    let idle_interval = Duration::from_millis(DEFAULT_IDLE_TICK_MS);
    let mut reader = EventStream::new();

    // Main event loop
    loop {
        terminal.draw(|f| app.render(f))?;
        app.after_draw();
        let busy = app.tick() | scheduler.take_frame_request();
        let wait = if busy { frame_interval } else { idle_interval };

        tokio::select! {
            maybe_event = reader.next() => match maybe_event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Some(Ok(Event::Mouse(mouse))) if !cli.no_mouse => app.handle_mouse(mouse),
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    tracing::error!(error = %e, "Terminal event stream failed");
                    break;
                }
                None => break,
            },
            _ = tokio::time::sleep(wait) => {}
            _ = scheduler.frame_requested(), if !busy => {}
        }

        if app.should_quit() {
            break;
        }
    }

    tracing::info!("Shutting down glidepath");
    terminal.show_cursor()?;
    Ok(())
}

fn load_config(cli: &Cli) -> Result<glidepath_config::GlidepathConfig> {
    let mut loader = ConfigLoader::new().load_dotenv()?;
    if let Some(path) = &cli.config_path {
        loader = loader.with_config_path(path.clone());
    }
    let mut loader = loader
        .from_env()?
        .from_file()
        .context("Failed to read config file")?;
    if cli.no_keyboard {
        loader = loader.with_keyboard_navigation(false);
    }
    Ok(loader.build()?)
}

/// Cell size in pixels as reported by the terminal, falling back to defaults.
fn cell_metrics() -> CellMetrics {
    match crossterm::terminal::window_size() {
        Ok(size) if size.width > 0 && size.height > 0 && size.columns > 0 && size.rows > 0 => {
            CellMetrics {
                width_px: f64::from(size.width) / f64::from(size.columns),
                height_px: f64::from(size.height) / f64::from(size.rows),
            }
        }
        _ => CellMetrics::default(),
    }
}
