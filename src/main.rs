//! Terminal Tetris runner (default binary).
//!
//! Runs the self-playing session at a fixed tick rate. The random-nudge
//! policy drives the piece on its own; arrow keys (or hjkl/wasd) steer
//! it manually on top, and `q` quits. Everything else, including game
//! over, is automatic: a blocked spawn restarts the session and bumps
//! the generation counter shown in the header.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use auto_tetris::core::GameSession;
use auto_tetris::input::{handle_key_event, should_quit};
use auto_tetris::term::TerminalRenderer;
use auto_tetris::types::{GameAction, GameConfig};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let config = GameConfig::default();
    let tick_duration = Duration::from_millis(1000 / config.tick_hz.max(1) as u64);
    let mut session = GameSession::new(config);

    let mut pending: Option<GameAction> = None;
    let mut last_tick = Instant::now();

    loop {
        // Input with timeout until next tick boundary.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        pending = Some(action);
                    }
                }
            }
        }

        // Tick and render.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            let view = session.tick(pending.take());
            term.draw(&view)?;
        }
    }
}
