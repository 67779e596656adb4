//! Terminal Blockfall runner (default binary).
//!
//! Reads key presses with crossterm, feeds them to the engine as commands,
//! and sends a `Tick` every tick interval. `r` starts over once the game has
//! ended. Rendering is a full redraw of the
//! framebuffer each frame.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use blockfall::config::HostConfig;
use blockfall::core::Game;
use blockfall::input::{map_key, should_quit};
use blockfall::term::{GameView, TerminalRenderer, Viewport};
use blockfall::types::Command;

fn main() -> Result<()> {
    let config = HostConfig::from_env();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &HostConfig) -> Result<()> {
    let mut game = Game::new(config.piece_source());
    let view = GameView::default();
    let tick = config.tick_interval();
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        term.draw(&view.render(game.state(), Viewport::new(w, h)))?;

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Release {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if game.state().game_over() && key.code == KeyCode::Char('r') {
                        game.restart();
                    } else if let Some(command) = map_key(key) {
                        game.apply(command);
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            game.apply(Command::Tick);
        }
    }
}
