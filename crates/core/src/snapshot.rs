use crate::arena::Arena;
use crate::pieces::{shape_for, PieceMatrix};
use crate::types::{PieceKind, Position};

/// Render-facing copy of a game at one instant.
///
/// Reuse one snapshot across frames with `GameState::snapshot_into` to keep
/// the per-frame path free of fresh allocations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub arena: Arena,
    pub active: PieceMatrix,
    pub active_kind: PieceKind,
    pub pos: Position,
    pub score: u32,
    pub drop_interval_ms: u32,
    pub seed: u32,
}

impl GameSnapshot {
    /// Non-empty arena cells as `(x, y, value)`
    pub fn arena_cells(&self) -> impl Iterator<Item = (i32, i32, u8)> + '_ {
        self.arena.occupied()
    }

    /// Occupied cells of the active piece in arena coordinates
    pub fn active_cells(&self) -> impl Iterator<Item = (i32, i32, u8)> + '_ {
        let pos = self.pos;
        self.active
            .occupied()
            .map(move |(x, y, v)| (pos.x + x, pos.y + y, v))
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            arena: Arena::new(0, 0),
            active: shape_for(PieceKind::T),
            active_kind: PieceKind::T,
            pos: Position::default(),
            score: 0,
            drop_interval_ms: 0,
            seed: 0,
        }
    }
}
