//! Game state module - the placement engine
//!
//! This module ties together the arena, the piece catalog, collision checks,
//! the piece picker and the scoring rules. It handles movement, rotation with
//! wall kicks, gravity, locking, row sweeps and the board-full reset.

use arrayvec::ArrayVec;

use crate::arena::Arena;
use crate::collision::collides;
use crate::pieces::{shape_for, PieceMatrix};
use crate::rng::PiecePicker;
use crate::scoring::{row_clear_points, Rules};
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, PieceKind, Position};

/// Maximum number of undrained core events kept by a game
pub const EVENT_CAPACITY: usize = 16;

/// The falling piece and the player's running score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub kind: PieceKind,
    pub matrix: PieceMatrix,
    pub pos: Position,
    pub score: u32,
}

/// What a single `drop()` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The piece moved down one row
    Moved,
    /// The piece could not move; it was merged and a new piece spawned
    Locked(LockReport),
}

/// Details of a lock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockReport {
    pub kind: PieceKind,
    pub pos: Position,
    pub rows_cleared: u32,
    /// The follow-up spawn found the board full and reset it
    pub board_reset: bool,
}

/// Core-side event for observers (score display, session journal).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreEvent {
    Spawned {
        kind: PieceKind,
        pos: Position,
    },
    /// `score` is taken after the sweep and before any board reset;
    /// `drop_interval_ms` is the interval in force after the follow-up spawn.
    Locked {
        kind: PieceKind,
        pos: Position,
        rows_cleared: u32,
        score: u32,
        drop_interval_ms: u32,
    },
    BoardReset {
        score_before: u32,
    },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    rules: Rules,
    arena: Arena,
    player: Player,
    picker: PiecePicker,
    drop_counter_ms: u32,
    drop_interval_ms: u32,
    events: ArrayVec<CoreEvent, EVENT_CAPACITY>,
}

impl GameState {
    /// Create a game with default rules and spawn the first piece
    pub fn new(seed: u32) -> Self {
        Self::with_rules(Rules::default(), seed)
    }

    /// Create a game with explicit rules and spawn the first piece
    pub fn with_rules(rules: Rules, seed: u32) -> Self {
        let kind = PieceKind::T;
        let mut state = Self {
            rules,
            arena: Arena::new(rules.width, rules.height),
            player: Player {
                kind,
                matrix: shape_for(kind),
                pos: Position::default(),
                score: 0,
            },
            picker: PiecePicker::new(seed),
            drop_counter_ms: 0,
            drop_interval_ms: rules.initial_drop_ms,
            events: ArrayVec::new(),
        };
        state.respawn();
        state
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Mutable arena access for scripted setups.
    ///
    /// Callers are responsible for not overlapping the active piece.
    pub fn arena_mut(&mut self) -> &mut Arena {
        &mut self.arena
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn active_kind(&self) -> PieceKind {
        self.player.kind
    }

    pub fn active_matrix(&self) -> &PieceMatrix {
        &self.player.matrix
    }

    pub fn position(&self) -> Position {
        self.player.pos
    }

    pub fn score(&self) -> u32 {
        self.player.score
    }

    /// Current fall interval (not counting fast drop)
    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn drop_counter_ms(&self) -> u32 {
        self.drop_counter_ms
    }

    pub fn seed(&self) -> u32 {
        self.picker.seed()
    }

    /// Occupied cells of the active piece in arena coordinates
    pub fn active_cells(&self) -> impl Iterator<Item = (i32, i32, u8)> + '_ {
        let pos = self.player.pos;
        self.player
            .matrix
            .occupied()
            .map(move |(x, y, v)| (pos.x + x, pos.y + y, v))
    }

    /// Whether the active piece currently overlaps the arena or its bounds
    pub fn active_collides(&self) -> bool {
        collides(&self.arena, &self.player.matrix, self.player.pos)
    }

    /// Replace the active piece with a fresh `kind` at `pos`.
    ///
    /// Intended for scripted setups; no collision check is made.
    pub fn set_active(&mut self, kind: PieceKind, pos: Position) {
        self.player.kind = kind;
        self.player.matrix = shape_for(kind);
        self.player.pos = pos;
    }

    /// Shift the piece horizontally by `direction`; reverted on collision.
    ///
    /// Returns whether the shift was kept.
    pub fn move_piece(&mut self, direction: i32) -> bool {
        let target = self.player.pos.offset(direction, 0);
        if collides(&self.arena, &self.player.matrix, target) {
            return false;
        }
        self.player.pos = target;
        true
    }

    /// Rotate the piece (`direction > 0` clockwise) with a wall-kick search.
    ///
    /// The kick shifts x by +1, -2, +3, -4, ... (cumulatively) until the rotated
    /// piece fits. The search is abandoned, with nothing changed, as soon as
    /// the next rightward offset would exceed the piece width. For a 3-wide
    /// piece the tried columns are x, x+1, x-1, x+2. Returns whether it was kept.
    pub fn rotate(&mut self, direction: i32) -> bool {
        let trial = self.player.matrix.rotated(direction);
        let width = trial.size() as i32;
        let mut pos = self.player.pos;
        let mut offset: i32 = 1;

        while collides(&self.arena, &trial, pos) {
            pos.x += offset;
            offset = -(offset + offset.signum());
            if offset > width {
                return false;
            }
        }

        self.player.matrix = trial;
        self.player.pos = pos;
        true
    }

    /// Move the piece down one row, locking it if it cannot move.
    ///
    /// A lock merges the piece, sweeps full rows, spawns the next piece and
    /// recomputes the fall interval from the new score. The fall accumulator
    /// is reset either way.
    pub fn drop(&mut self) -> DropOutcome {
        self.drop_counter_ms = 0;

        let below = self.player.pos.offset(0, 1);
        if !collides(&self.arena, &self.player.matrix, below) {
            self.player.pos = below;
            return DropOutcome::Moved;
        }

        let kind = self.player.kind;
        let pos = self.player.pos;

        self.merge();
        let rows_cleared = self.sweep_rows();
        let lock_event = self.events.len();
        self.push_event(CoreEvent::Locked {
            kind,
            pos,
            rows_cleared,
            score: self.player.score,
            drop_interval_ms: self.drop_interval_ms,
        });

        let board_reset = self.respawn();
        self.drop_interval_ms = self.rules.drop_interval_ms(self.player.score);

        // The lock reports the interval the game continues with, reset or not.
        if let Some(CoreEvent::Locked {
            drop_interval_ms, ..
        }) = self.events.get_mut(lock_event)
        {
            *drop_interval_ms = self.drop_interval_ms;
        }

        DropOutcome::Locked(LockReport {
            kind,
            pos,
            rows_cleared,
            board_reset,
        })
    }

    /// Write every occupied piece cell into the arena
    pub fn merge(&mut self) {
        let pos = self.player.pos;
        for (x, y, v) in self.player.matrix.occupied() {
            self.arena.set(pos.x + x, pos.y + y, v);
        }
    }

    /// Remove full rows, scanning from the bottom up to (not including) row 0.
    ///
    /// After a removal the same index is examined again, since the row above
    /// has moved into it. Each cleared row scores `row_clear_score`.
    pub fn sweep_rows(&mut self) -> u32 {
        let mut cleared = 0;
        let mut y = self.arena.height().saturating_sub(1);

        while y > 0 {
            if self.arena.is_row_full(y) {
                self.arena.remove_row(y);
                cleared += 1;
            } else {
                y -= 1;
            }
        }

        self.player.score = self
            .player
            .score
            .saturating_add(row_clear_points(cleared, self.rules.row_clear_score));
        cleared
    }

    /// Spawn a uniformly random piece.
    ///
    /// Returns true if the spawn collided and the board was reset.
    pub fn respawn(&mut self) -> bool {
        let kind = self.picker.pick();
        self.spawn(kind)
    }

    /// Spawn `kind` centred at the top row.
    ///
    /// If it collides immediately the board is full: the arena is cleared, the
    /// score drops to zero and the fall interval returns to its baseline.
    /// Returns true in that case.
    pub fn spawn(&mut self, kind: PieceKind) -> bool {
        let matrix = shape_for(kind);
        let x = (self.arena.width() / 2) as i32 - (matrix.size() / 2) as i32;
        self.player.kind = kind;
        self.player.matrix = matrix;
        self.player.pos = Position::new(x, 0);
        self.push_event(CoreEvent::Spawned {
            kind,
            pos: self.player.pos,
        });

        if !self.active_collides() {
            return false;
        }

        let score_before = self.player.score;
        self.arena.clear();
        self.player.score = 0;
        self.drop_interval_ms = self.rules.base_drop_ms;
        self.push_event(CoreEvent::BoardReset { score_before });
        true
    }

    /// Advance the fall timer by `elapsed_ms`.
    ///
    /// Drops once the accumulator exceeds the active interval, which is
    /// `fast_drop_ms` while `fast_drop` is held.
    pub fn tick(&mut self, elapsed_ms: u32, fast_drop: bool) -> Option<DropOutcome> {
        self.drop_counter_ms = self.drop_counter_ms.saturating_add(elapsed_ms);
        let interval = if fast_drop {
            self.rules.fast_drop_ms
        } else {
            self.drop_interval_ms
        };

        if self.drop_counter_ms > interval {
            Some(self.drop())
        } else {
            None
        }
    }

    /// Apply a discrete input action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_piece(-1),
            GameAction::MoveRight => self.move_piece(1),
            GameAction::RotateCw => self.rotate(1),
            GameAction::RotateCcw => self.rotate(-1),
            GameAction::Drop => {
                self.drop();
                true
            }
        }
    }

    /// Take all pending events, oldest first.
    ///
    /// At most [`EVENT_CAPACITY`] events are buffered between calls. Once the
    /// buffer is full, further events are discarded until it is drained, so
    /// callers that care about `Locked` or `BoardReset` should drain after
    /// every `tick` or action.
    pub fn take_events(&mut self) -> ArrayVec<CoreEvent, EVENT_CAPACITY> {
        std::mem::take(&mut self.events)
    }

    fn push_event(&mut self, event: CoreEvent) {
        // Full buffer: keep the oldest, discard the rest.
        let _ = self.events.try_push(event);
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.arena.copy_from(&self.arena);
        out.active.clone_from(&self.player.matrix);
        out.active_kind = self.player.kind;
        out.pos = self.player.pos;
        out.score = self.player.score;
        out.drop_interval_ms = self.drop_interval_ms;
        out.seed = self.picker.seed();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
