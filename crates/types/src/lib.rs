//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, session journal).
//!
//! # Arena Dimensions
//!
//! The default arena is 15 columns by 30 rows. Cells hold a small integer:
//! `0` is empty, `1..=7` identifies the piece kind that filled it.
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Frame loop interval (~60 FPS) |
//! | `INITIAL_DROP_MS` | 500 | Fall interval before the first lock |
//! | `BASE_DROP_MS` | 1000 | Fall interval baseline for the difficulty curve |
//! | `FAST_DROP_MS` | 15 | Fall interval while fast drop is held |
//! | `MOVE_REPEAT_MS` | 50 | Repeat rate of a held move control |
//!
//! # Difficulty Curve
//!
//! The fall interval halves every `SPEEDUP_SCORE_STEP` points:
//! `BASE_DROP_MS / 2^floor(score / 30)`.
//!
//! # Examples
//!
//! ```
//! use pig_tetris_types::{GameAction, PieceKind, ARENA_HEIGHT, ARENA_WIDTH};
//!
//! let piece = PieceKind::from_value(1).unwrap();
//! assert_eq!(piece, PieceKind::T);
//! assert_eq!(piece.as_str(), "t");
//! assert_ne!(GameAction::RotateCw, GameAction::RotateCcw);
//!
//! assert_eq!(ARENA_WIDTH, 15);
//! assert_eq!(ARENA_HEIGHT, 30);
//! ```

/// Arena width in cells (15 columns)
pub const ARENA_WIDTH: usize = 15;

/// Arena height in cells (30 rows)
pub const ARENA_HEIGHT: usize = 30;

/// Frame loop interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Fall interval used until the first piece locks
pub const INITIAL_DROP_MS: u32 = 500;

/// Baseline fall interval; halved every `SPEEDUP_SCORE_STEP` points
pub const BASE_DROP_MS: u32 = 1000;

/// Fall interval while the fast-drop control is held
pub const FAST_DROP_MS: u32 = 15;

/// Repeat interval of a held move control
pub const MOVE_REPEAT_MS: u32 = 50;

/// Points awarded per cleared row
pub const ROW_CLEAR_SCORE: u32 = 15;

/// Score step at which the fall interval halves
pub const SPEEDUP_SCORE_STEP: u32 = 30;

/// Value of an empty cell
pub const EMPTY: u8 = 0;


/// The seven tetromino piece kinds
///
/// Each kind carries a fixed cell value that renderers use to pick a color:
/// T=1, O=2, L=3, J=4, I=5, S=6, Z=7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    T,
    O,
    L,
    J,
    I,
    S,
    Z,
}

impl PieceKind {
    /// All kinds, in spawn-table order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::T,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::I,
    ];

    /// Cell value written into the arena when this piece locks
    pub fn value(self) -> u8 {
        match self {
            PieceKind::T => 1,
            PieceKind::O => 2,
            PieceKind::L => 3,
            PieceKind::J => 4,
            PieceKind::I => 5,
            PieceKind::S => 6,
            PieceKind::Z => 7,
        }
    }

    /// Map a non-zero cell value back to its piece kind
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(PieceKind::T),
            2 => Some(PieceKind::O),
            3 => Some(PieceKind::L),
            4 => Some(PieceKind::J),
            5 => Some(PieceKind::I),
            6 => Some(PieceKind::S),
            7 => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Uppercase letter of this kind
    pub fn as_char(self) -> char {
        match self {
            PieceKind::T => 'T',
            PieceKind::O => 'O',
            PieceKind::L => 'L',
            PieceKind::J => 'J',
            PieceKind::I => 'I',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
        }
    }

    /// Lowercase string form (used by the session journal)
    pub fn as_str(self) -> &'static str {
        match self {
            PieceKind::T => "t",
            PieceKind::O => "o",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::I => "i",
            PieceKind::S => "s",
            PieceKind::Z => "z",
        }
    }
}

/// Offset of a piece's top-left matrix cell in arena coordinates
///
/// Either component may be negative while empty matrix columns or rows hang
/// outside the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Discrete game actions produced by input sources
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Drop piece one row (locks if it cannot move)
    Drop,
}
