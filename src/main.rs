//! Terminal 2048 runner (default binary).
//!
//! Reads keys with crossterm, feeds them to the game session, and redraws the
//! board through the framebuffer renderer after every event.

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use env_logger::{Env, Target};
use log::info;

use tui_2048::config::GameConfig;
use tui_2048::core::{GameSnapshot, GameState};
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    init_logging(&config)?;

    let seed = config.resolve_seed();
    info!("starting tui-2048 with seed {}", seed);

    let mut term = TerminalRenderer::new();
    if let Err(e) = term.enter() {
        let _ = term.exit();
        return Err(e);
    }

    let result = run(&mut term, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(config: &GameConfig) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(Env::default().default_filter_or(config.default_log_filter()));

    if let Some(path) = &config.log_path {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    builder.try_init().context("installing logger")?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, seed: u32) -> Result<()> {
    let mut game = GameState::new(seed);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    info!(
                        "quit: episode {} score {} after {} moves",
                        game.episode_id(),
                        game.score(),
                        game.moves()
                    );
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    game.apply_action(action);
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
