//! Held-control input state for terminal environments.
//!
//! Move and fast-drop controls are plain flags. The frame loop calls
//! [`InputHandler::update`] once per frame to turn held moves into repeats and
//! reads [`InputHandler::fast_drop_held`] to pick the fall interval. No timers
//! are started per key, so a missed or reordered release can never leave a
//! stray repeat running.
//!
//! Supports terminals that do not emit key release events by using a timeout.

use std::time::Instant;

use arrayvec::ArrayVec;
use crossterm::event::KeyCode;

use crate::types::{GameAction, MOVE_REPEAT_MS};

// In terminals without key-release events, a short timeout prevents a single tap
// from turning into a sustained "held" state that keeps repeating.
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Controls that repeat or stay active while held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeldControl {
    Left,
    Right,
    FastDrop,
}

impl HeldControl {
    pub fn from_key(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') | KeyCode::Char('H') => {
                Some(HeldControl::Left)
            }
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') | KeyCode::Char('L') => {
                Some(HeldControl::Right)
            }
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') | KeyCode::Char('J') => {
                Some(HeldControl::FastDrop)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct RepeatStream {
    held: bool,
    accumulator_ms: u32,
}

impl RepeatStream {
    /// Returns false if the stream was already running.
    fn press(&mut self) -> bool {
        if self.held {
            return false;
        }
        self.held = true;
        self.accumulator_ms = 0;
        true
    }

    fn release(&mut self) {
        self.held = false;
        self.accumulator_ms = 0;
    }
}

/// Tracks held controls and emits repeat actions.
#[derive(Debug, Clone)]
pub struct InputHandler {
    left: RepeatStream,
    right: RepeatStream,
    fast_drop: bool,
    last_key_time: Instant,
    repeat_ms: u32,
    key_release_timeout_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_repeat_ms(MOVE_REPEAT_MS)
    }

    pub fn with_repeat_ms(repeat_ms: u32) -> Self {
        Self {
            left: RepeatStream::default(),
            right: RepeatStream::default(),
            fast_drop: false,
            last_key_time: Instant::now(),
            repeat_ms: repeat_ms.max(1),
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    pub fn repeat_ms(&self) -> u32 {
        self.repeat_ms
    }

    /// Handle a key press.
    ///
    /// Returns the immediate move for a newly held move control. A press on a
    /// control that is already held returns `None` and does not restart it.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<GameAction> {
        let control = HeldControl::from_key(code)?;
        self.last_key_time = Instant::now();
        match control {
            HeldControl::Left => self.left.press().then_some(GameAction::MoveLeft),
            HeldControl::Right => self.right.press().then_some(GameAction::MoveRight),
            HeldControl::FastDrop => {
                self.fast_drop = true;
                None
            }
        }
    }

    /// Handle a terminal auto-repeat event: keeps the control alive, no action.
    pub fn handle_key_repeat(&mut self, code: KeyCode) {
        if HeldControl::from_key(code).is_some() {
            self.last_key_time = Instant::now();
        }
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        match HeldControl::from_key(code) {
            Some(HeldControl::Left) => self.left.release(),
            Some(HeldControl::Right) => self.right.release(),
            Some(HeldControl::FastDrop) => self.fast_drop = false,
            None => {}
        }
    }

    /// Whether the fast-drop control is currently held
    pub fn fast_drop_held(&self) -> bool {
        self.fast_drop
    }

    pub fn is_held(&self, control: HeldControl) -> bool {
        match control {
            HeldControl::Left => self.left.held,
            HeldControl::Right => self.right.held,
            HeldControl::FastDrop => self.fast_drop,
        }
    }

    /// Advance held controls by `elapsed_ms` and collect the repeat moves due.
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<GameAction, 32> {
        let mut actions = ArrayVec::<GameAction, 32>::new();

        // Auto-release when terminal does not emit release events.
        let time_since_last_key = self.last_key_time.elapsed().as_millis() as u32;
        if time_since_last_key > self.key_release_timeout_ms {
            self.left.release();
            self.right.release();
            self.fast_drop = false;
        }

        let repeat_ms = self.repeat_ms;
        for (stream, action) in [
            (&mut self.left, GameAction::MoveLeft),
            (&mut self.right, GameAction::MoveRight),
        ] {
            if !stream.held {
                continue;
            }
            stream.accumulator_ms = stream.accumulator_ms.saturating_add(elapsed_ms);
            while stream.accumulator_ms >= repeat_ms {
                let _ = actions.try_push(action);
                stream.accumulator_ms -= repeat_ms;
            }
        }

        actions
    }

    pub fn reset(&mut self) {
        self.left.release();
        self.right.release();
        self.fast_drop = false;
        self.last_key_time = Instant::now();
    }

    #[cfg(test)]
    fn backdate_last_key(&mut self, by: std::time::Duration) {
        self.last_key_time = Instant::now() - by;
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn handler() -> InputHandler {
        InputHandler::new().with_key_release_timeout_ms(10_000)
    }

    #[test]
    fn test_press_moves_once_then_repeats_every_interval() {
        let mut ih = handler();

        assert_eq!(ih.handle_key_press(KeyCode::Left), Some(GameAction::MoveLeft));

        assert!(ih.update(49).is_empty());
        assert_eq!(ih.update(1).as_slice(), &[GameAction::MoveLeft]);
        assert_eq!(
            ih.update(100).as_slice(),
            &[GameAction::MoveLeft, GameAction::MoveLeft]
        );
    }

    #[test]
    fn test_second_press_while_held_is_ignored() {
        let mut ih = handler();

        assert_eq!(ih.handle_key_press(KeyCode::Right), Some(GameAction::MoveRight));
        assert!(ih.update(30).is_empty());
        assert_eq!(ih.handle_key_press(KeyCode::Right), None);

        // The running stream keeps its accumulated time.
        assert_eq!(ih.update(20).as_slice(), &[GameAction::MoveRight]);
    }

    #[test]
    fn test_release_stops_repeats_immediately() {
        let mut ih = handler();

        ih.handle_key_press(KeyCode::Left);
        assert!(!ih.update(120).is_empty());

        ih.handle_key_release(KeyCode::Left);
        assert!(ih.update(500).is_empty());
        assert!(!ih.is_held(HeldControl::Left));
    }

    #[test]
    fn test_left_and_right_are_independent() {
        let mut ih = handler();

        ih.handle_key_press(KeyCode::Left);
        ih.handle_key_press(KeyCode::Right);
        ih.handle_key_release(KeyCode::Left);

        assert_eq!(ih.update(50).as_slice(), &[GameAction::MoveRight]);
    }

    #[test]
    fn test_fast_drop_flag_follows_press_and_release() {
        let mut ih = handler();
        assert!(!ih.fast_drop_held());

        assert_eq!(ih.handle_key_press(KeyCode::Down), None);
        assert!(ih.fast_drop_held());
        assert!(ih.update(200).is_empty());

        ih.handle_key_release(KeyCode::Down);
        assert!(!ih.fast_drop_held());
    }

    #[test]
    fn test_auto_release_triggers_after_timeout_without_key_release_events() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(50);

        ih.handle_key_press(KeyCode::Left);
        ih.handle_key_press(KeyCode::Down);
        ih.backdate_last_key(Duration::from_millis(51));

        assert!(ih.update(100).is_empty());
        assert!(!ih.is_held(HeldControl::Left));
        assert!(!ih.fast_drop_held());
    }

    #[test]
    fn test_repeat_event_extends_hold() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(50);

        ih.handle_key_press(KeyCode::Left);
        ih.backdate_last_key(Duration::from_millis(51));
        ih.handle_key_repeat(KeyCode::Left);

        assert_eq!(ih.update(50).as_slice(), &[GameAction::MoveLeft]);
    }

    #[test]
    fn test_non_control_key_is_ignored() {
        let mut ih = handler();
        assert_eq!(ih.handle_key_press(KeyCode::Up), None);
        assert!(!ih.is_held(HeldControl::Left));
        assert!(!ih.fast_drop_held());
    }

    #[test]
    fn test_reset_clears_held_state_and_stops_repeats() {
        let mut ih = handler();

        ih.handle_key_press(KeyCode::Left);
        ih.handle_key_press(KeyCode::Down);
        assert!(!ih.update(200).is_empty());

        ih.reset();
        assert!(ih.update(200).is_empty());
        assert!(!ih.fast_drop_held());
    }
}
