//! wildcatch terminal UI
//!
//! Loads the catalogue in the background, reveals a creature every
//! interval and lets you catch up to six of them.
//!
//! Run with: cargo run --features tui --bin wildcatch

use std::fs::File;
use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use wildcatch::core::config::{DEFAULT_BASE_URL, DEFAULT_CATALOGUE_SIZE};
use wildcatch::tui::{panels, AppState};
use wildcatch::{CatalogueConfig, HttpSource, Session, SessionHandle, SpriteCache};

/// Catch creatures as they appear
#[derive(Parser, Debug)]
#[command(name = "wildcatch")]
#[command(about = "Reveal creatures on a timer and catch up to six at once")]
struct Args {
    /// Endpoint prefix; the creature id is appended
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Number of creatures in the catalogue
    #[arg(long, default_value_t = DEFAULT_CATALOGUE_SIZE)]
    catalogue_size: u32,

    /// Milliseconds between reveals
    #[arg(long, default_value_t = 500)]
    reveal_ms: u64,

    /// Seconds between the start of two fetch batches
    #[arg(long, default_value_t = 60)]
    batch_delay_secs: u64,

    /// Fixed seed for the reveal order
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs here (RUST_LOG filters, default "wildcatch=info")
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Redraw rate
const TICK_RATE: Duration = Duration::from_millis(50);

impl Args {
    fn config(&self) -> CatalogueConfig {
        let config = CatalogueConfig::new()
            .with_base_url(self.base_url.clone())
            .with_catalogue_size(self.catalogue_size)
            .with_reveal_interval(Duration::from_millis(self.reveal_ms))
            .with_batch_delay(Duration::from_secs(self.batch_delay_secs));
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

fn init_logging(path: Option<&PathBuf>) -> anyhow::Result<()> {
    // The terminal belongs to the UI, so logs only go to a file.
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wildcatch=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_ref())?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("building tokio runtime")?;

    let config = args.config();
    let source = HttpSource::new(config.clone()).context("building HTTP client")?;
    let sprites = SpriteCache::new(source.client().clone());

    let handle = {
        let _guard = runtime.enter();
        Session::new(config, Arc::new(source), Arc::new(sprites)).spawn()
    };
    tracing::info!("session started");

    // Restore the terminal even if rendering panics.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(out))?;

    let result = run_ui(&mut terminal, &handle);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let controller = runtime.block_on(handle.shutdown()).context("session task failed")?;
    tracing::info!(caught = controller.ever_caught(), "session ended");
    result
}

fn run_ui<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    handle: &SessionHandle,
) -> anyhow::Result<()> {
    let mut snapshots = handle.subscribe();
    let mut state = AppState::new(snapshots.borrow_and_update().clone());

    loop {
        if snapshots.has_changed().unwrap_or(false) {
            state.update(snapshots.borrow_and_update().clone());
        }

        terminal.draw(|f| panels::render(f, &state))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                if let Some(command) = state.handle_key(key) {
                    if !handle.send(command) {
                        anyhow::bail!("session ended unexpectedly");
                    }
                }
            }
        }

        if state.should_quit {
            return Ok(());
        }
    }
}
