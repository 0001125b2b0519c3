//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Unit tests for every rule
//! - **Portable**: Can run in any environment (terminal, headless)
//!
//! # Module Structure
//!
//! - [`arena`]: the settled grid with row removal
//! - [`pieces`]: the seven piece patterns and matrix rotation
//! - [`collision`]: piece-versus-arena overlap test
//! - [`game_state`]: move, rotate with wall kicks, drop, lock, sweep, spawn
//! - [`rng`]: seeded uniform piece picker
//! - [`scoring`]: rules, row-clear points and the fall-speed curve
//!
//! # Game Rules
//!
//! - **Arena**: 15 x 30 by default; cell `0` is empty, `1..=7` a piece kind
//! - **Spawn**: uniform random kind, centred at the top row
//! - **Wall kick**: after a rotation, shift x by +1, -2, +3, ... until it fits
//! - **Sweep**: each full row scores 15; the top row is never swept
//! - **Speed**: the fall interval halves every 30 points
//! - **Board full**: a colliding spawn clears the arena and resets the score
//!
//! # Example
//!
//! ```
//! use pig_tetris_core::GameState;
//! use pig_tetris_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! game.apply_action(GameAction::Drop);
//!
//! assert_eq!(game.score(), 0);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the
//! elapsed time and whether fast drop is held.

pub mod arena;
pub mod collision;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use pig_tetris_types as types;

// Re-export commonly used types for convenience
pub use arena::Arena;
pub use collision::collides;
pub use game_state::{CoreEvent, DropOutcome, GameState, LockReport, Player};
pub use pieces::{shape_for, PieceMatrix, MAX_PIECE_SIZE};
pub use rng::{PiecePicker, SimpleRng};
pub use scoring::{drop_interval_for_score, Rules};
pub use snapshot::GameSnapshot;
