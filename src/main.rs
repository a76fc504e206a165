//! A swipeable card carousel for the terminal.
//!
//! Drag a card left or right with the mouse, click Prev / Next, or use the
//! arrow keys.  Run with `--deck <file>` to show your own cards.

mod app;
mod config;
mod core;
mod ui;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use crate::app::{
    event::{AppEvent, EventReader},
    handler,
    state::AppState,
    terminal::TerminalSession,
};
use crate::ui::screen;

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Swipeable card carousel")]
struct Cli {
    /// Deck file with `[card]` sections (defaults to the built-in showcase).
    #[arg(long)]
    deck: Option<PathBuf>,

    /// Swipe threshold in distance units (overrides the config file).
    #[arg(long)]
    threshold: Option<i32>,

    /// Write the effective configuration to the config file and exit.
    #[arg(long = "write-config")]
    write_config: bool,
}

/// Frame interval while idle; also drives the slide animation.
const TICK_RATE: Duration = Duration::from_millis(33);

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing (only emits when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // the UI owns stdout
        .init();

    let cli = Cli::parse();

    let mut user_config = config::AppConfig::load();
    if let Some(threshold) = cli.threshold {
        user_config.swipe_threshold = threshold.max(1);
    }

    if cli.write_config {
        let path = user_config.save()?;
        println!("wrote {}", path.display());
        return Ok(());
    }

    let cards = match &cli.deck {
        Some(path) => crate::core::deck::load(path)
            .with_context(|| format!("loading deck {}", path.display()))?,
        None => crate::core::deck::builtin(),
    };
    tracing::info!(cards = cards.len(), "starting carousel");
    let mut state = AppState::new(cards, user_config);

    // ── terminal setup ────────────────────────────────────────
    // Declared before the reader so the reader stops first on the way out.
    let mut session = TerminalSession::enter()?;
    let mut events = EventReader::spawn(TICK_RATE);

    // ── event loop ────────────────────────────────────────────
    let mut needs_redraw = true;
    loop {
        if needs_redraw {
            session.terminal().draw(|frame| {
                state.terminal_area = frame.area();
                screen::draw(frame, &state);
            })?;
        }

        let Some(event) = events.next().await else {
            break;
        };
        needs_redraw = match event {
            AppEvent::Key(k) => {
                handler::handle_key(&mut state, k);
                true
            }
            AppEvent::Mouse(m) => {
                handler::handle_mouse(&mut state, m);
                true
            }
            // The layout under the pointer changed, drop the drag.
            AppEvent::Resize | AppEvent::FocusLost => {
                handler::cancel_drag(&mut state);
                true
            }
            AppEvent::Tick => {
                // Idle ticks only matter while a slide is settling.
                let animating = state.transition.is_animating();
                state.transition.tick();
                animating
            }
        };

        if state.should_quit {
            break;
        }
    }

    Ok(())
}
