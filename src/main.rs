//! Terminal runner for the falling-block game.
//!
//! Polls crossterm input until the next frame is due, then advances held
//! controls and the fall timer by the measured frame time and redraws through
//! the framebuffer renderer.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use pig_tetris::config::AppConfig;
use pig_tetris::core::{GameSnapshot, GameState};
use pig_tetris::input::{handle_key_event, should_quit, HeldControl, InputHandler};
use pig_tetris::journal::Journal;
use pig_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = AppConfig::from_env();

    let mut journal = match &config.log_path {
        Some(path) => Some(Journal::open(path).context("PIG_TETRIS_LOG_PATH")?),
        None => None,
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&config, &mut term, journal.as_mut());

    // Always try to restore terminal state.
    let _ = term.exit();

    let score = result?;
    if let Some(journal) = journal.as_mut() {
        journal.session_end(score);
    }
    Ok(())
}

/// Play until the quit key; returns the final score.
fn run(config: &AppConfig, term: &mut TerminalRenderer, mut journal: Option<&mut Journal>) -> Result<u32> {
    let mut game = GameState::with_rules(config.rules, config.seed);
    let mut input = InputHandler::with_repeat_ms(config.move_repeat_ms)
        .with_key_release_timeout_ms(config.key_release_timeout_ms);

    if let Some(journal) = journal.as_deref_mut() {
        journal.session_start(config.seed, config.rules.width, config.rules.height);
    }

    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let frame = Duration::from_millis(config.frame_ms as u64);
    let mut last_frame = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input until the next frame is due.
        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            break;
                        }
                        on_key_press(&mut game, &mut input, key);
                    }
                    KeyEventKind::Repeat => input.handle_key_repeat(key.code),
                    KeyEventKind::Release => input.handle_key_release(key.code),
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Frame.
        let elapsed = last_frame.elapsed();
        if elapsed < frame {
            continue;
        }
        last_frame = Instant::now();
        let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);

        for action in input.update(elapsed_ms) {
            game.apply_action(action);
        }
        game.tick(elapsed_ms, input.fast_drop_held());

        let events = game.take_events();
        if let Some(journal) = journal.as_deref_mut() {
            for event in &events {
                journal.record_event(event);
            }
        }
    }

    Ok(game.score())
}

fn on_key_press(game: &mut GameState, input: &mut InputHandler, key: KeyEvent) {
    // Held controls (moves, fast drop) go through the input handler.
    if HeldControl::from_key(key.code).is_some() {
        if let Some(action) = input.handle_key_press(key.code) {
            game.apply_action(action);
        }
        return;
    }
    if let Some(action) = handle_key_event(key) {
        game.apply_action(action);
    }
}
