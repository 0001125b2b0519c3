//! Pig Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates as `pig_tetris::{core,input,journal,term,types}`
//! and hosts the environment configuration used by the binary.

pub mod config;

pub use pig_tetris_core as core;
pub use pig_tetris_input as input;
pub use pig_tetris_journal as journal;
pub use pig_tetris_term as term;
pub use pig_tetris_types as types;
