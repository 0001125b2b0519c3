//! Terminal rendering for the falling-block game.
//!
//! Rendering goes through a plain framebuffer instead of a widget toolkit:
//! [`GameView`] paints a snapshot into a [`FrameBuffer`], and
//! [`TerminalRenderer`] flushes only the cells that changed since the last
//! frame. Blocks are two columns wide so the arena looks square in most fonts.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use pig_tetris_core as core;
pub use pig_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{block_style, AnchorY, FrameRect, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
