//! Terminal snake runner (default binary).
//!
//! Owns everything the rules engine does not: the tick cadence, key input,
//! pause/restart handling and drawing. The engine is only ever called through
//! `initialize`, `apply_action`, `advance_ticks` and `snapshot`.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use grid_snake::core::{ticks_for_elapsed, GameSnapshot, GameState, SessionRng};
use grid_snake::input::{handle_key_event, should_quit};
use grid_snake::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use grid_snake::types::{BoardConfig, GameAction, Mode, DEFAULT_COLS, DEFAULT_ROWS, TICK_MS};

#[derive(Debug, Parser)]
#[command(name = "grid-snake", version, about = "Snake on a fixed grid, in the terminal")]
struct Args {
    /// Board width in cells
    #[arg(long, default_value_t = DEFAULT_COLS)]
    cols: u16,

    /// Board height in cells
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: u16,

    /// Milliseconds between ticks
    #[arg(long, default_value_t = TICK_MS, value_parser = clap::value_parser!(u64).range(1..))]
    tick_ms: u64,

    /// Seed for food placement (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Write engine logs to this file (the terminal is in use by the game)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("grid_snake_core=debug,grid_snake=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let board = BoardConfig::new(args.cols, args.rows)?;
    let mut rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    // Validate before touching the terminal so errors print normally.
    let state = GameState::initialize(board, &mut rng)?;
    info!(
        cols = board.cols(),
        rows = board.rows(),
        seed = rng.seed(),
        tick_ms = args.tick_ms,
        "session started"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, state, board, &mut rng, args.tick_ms);

    // Always try to restore terminal state.
    conclude(result, term.exit())
}

/// Merge the game loop outcome with the terminal restore outcome
///
/// A loop error takes precedence. A restore failure is always logged and is
/// returned only when the loop itself ended cleanly.
fn conclude(result: Result<()>, restored: Result<()>) -> Result<()> {
    if let Err(err) = restored {
        warn!(error = %err, "failed to restore terminal");
        if result.is_ok() {
            return Err(err.context("failed to restore terminal"));
        }
    }
    result
}

fn run(
    term: &mut TerminalRenderer,
    mut state: GameState,
    board: BoardConfig,
    rng: &mut SessionRng,
    tick_ms: u64,
) -> Result<()> {
    let tick_duration = Duration::from_millis(tick_ms);
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        state.snapshot_into(board, &mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!(score = state.score(), mode = state.mode().as_str(), "quit");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        state = apply(state, action, board, rng)?;
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick, catching up on whole ticks missed by a slow frame.
        let elapsed = last_tick.elapsed();
        if state.mode() != Mode::Running {
            last_tick = Instant::now();
        } else if elapsed >= tick_duration {
            last_tick = Instant::now();
            let elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
            let steps = ticks_for_elapsed(elapsed_ms, tick_ms);
            state = state.advance_ticks(board, steps, rng);
            if state.mode().is_terminal() {
                info!(score = state.score(), mode = state.mode().as_str(), "game ended");
            }
        }
    }
}

fn apply(
    state: GameState,
    action: GameAction,
    board: BoardConfig,
    rng: &mut SessionRng,
) -> Result<GameState> {
    if action == GameAction::Restart {
        info!(score = state.score(), "restart");
    }
    Ok(state.apply_action(action, board, rng)?)
}
