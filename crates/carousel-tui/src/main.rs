//! `carousel-tui`: terminal renderer for the console carousel.
//!
//! Built on [ratatui](https://ratatui.rs) with reactive state from
//! `carousel-core`'s [`CarouselStream`](carousel_core::CarouselStream).
//! Slides rotate on the carousel's own timer until the viewer navigates
//! with ←/→ or jumps with 1-9; from then on rotation stays manual.
//!
//! Logs are written to a file (default `/tmp/carousel-tui.log`) to avoid
//! corrupting the terminal UI.
//!
//! Entry point: CLI argument parsing, deck loading, tracing setup, panic
//! hooks, and app launch.

mod action;
mod app;
mod bridge;
mod component;
mod event;
mod theme;
mod tui;
mod view;
mod widgets;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use carousel_config::Deck;
use carousel_core::{Carousel, CarouselConfig};

use crate::app::App;

/// Terminal console carousel.
#[derive(Parser, Debug)]
#[command(name = "carousel-tui", version, about)]
struct Cli {
    /// Deck file (defaults to the platform config dir, then the built-in deck)
    #[arg(short = 'd', long, env = "CAROUSEL_DECK")]
    deck: Option<PathBuf>,

    /// Autoplay interval in milliseconds (overrides the deck)
    #[arg(short = 'i', long)]
    interval_ms: Option<u64>,

    /// Print the resolved deck as TOML and exit
    #[arg(long)]
    print_deck: bool,

    /// Log file path (defaults to /tmp/carousel-tui.log)
    #[arg(long, default_value = "/tmp/carousel-tui.log")]
    log_file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Set up file-based tracing. We MUST NOT log to stdout/stderr because that would
/// corrupt the TUI output. Returns a guard that must be held for the
/// lifetime of the application to ensure logs are flushed.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("carousel_tui={log_level},carousel_core={log_level}"))
    });

    let log_dir = cli
        .log_file
        .parent()
        .unwrap_or(std::path::Path::new("/tmp"));
    let log_filename = cli
        .log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("carousel-tui.log"));

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true),
        )
        .init();

    guard
}

/// Load the deck and apply CLI overrides. Priority: flags > env > deck file > built-in.
fn resolve_deck(cli: &Cli) -> Result<Deck> {
    let mut deck = carousel_config::load_deck(cli.deck.as_deref())?;
    if let Some(interval_ms) = cli.interval_ms {
        let config = CarouselConfig::from_millis(interval_ms);
        config.validate()?;
        deck.config = config;
    }
    Ok(deck)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Install panic/error hooks BEFORE entering the terminal
    tui::install_hooks()?;

    let deck = resolve_deck(&cli)?;
    if cli.print_deck {
        print!("{}", carousel_config::render_deck(&deck)?);
        return Ok(());
    }

    // Tracing to file; hold the guard so logs flush on exit
    let _log_guard = setup_tracing(&cli);

    info!(
        deck = %cli.deck.as_deref().unwrap_or(&carousel_config::deck_path()).display(),
        slides = deck.slides.len(),
        interval_ms = u64::try_from(deck.config.interval.as_millis()).unwrap_or(u64::MAX),
        "starting carousel-tui"
    );

    let carousel = Carousel::start(deck.slides, deck.config)?;
    let mut app = App::new(carousel.clone());
    let result = app.run().await;

    // One carousel per app lifetime; release its timer before exit
    carousel.shutdown().await;
    result
}
