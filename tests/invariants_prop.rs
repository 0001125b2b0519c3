//! Property tests over generated seeds and action sequences.
//!
//! Invariants covered:
//! - The active piece never overlaps settled cells or leaves the arena.
//! - Arena cells always hold values in `0..=7`.
//! - The score only moves in steps of the row-clear score, or resets to zero.
//! - The fall interval follows the score curve after every lock.
//! - `move_piece` shifts by exactly the direction or not at all.
//! - `collides` has no side effects and is repeatable.

use proptest::prelude::*;

use pig_tetris::core::{collides, drop_interval_for_score, shape_for, DropOutcome, GameState, Rules};
use pig_tetris::types::{GameAction, PieceKind, Position};

fn action_strategy() -> impl Strategy<Value = GameAction> {
    prop_oneof![
        Just(GameAction::MoveLeft),
        Just(GameAction::MoveRight),
        Just(GameAction::RotateCw),
        Just(GameAction::RotateCcw),
        Just(GameAction::Drop),
    ]
}

fn kind_strategy() -> impl Strategy<Value = PieceKind> {
    (0usize..7).prop_map(|i| PieceKind::ALL[i])
}

proptest! {
    #[test]
    fn active_piece_never_collides(
        seed in any::<u32>(),
        width in 4usize..12,
        height in 4usize..16,
        steps in prop::collection::vec((action_strategy(), 0u32..40, any::<bool>()), 1..300),
    ) {
        let rules = Rules::with_size(width, height);
        let mut game = GameState::with_rules(rules, seed);
        prop_assert!(!game.active_collides());

        for (action, elapsed, fast) in steps {
            let score_before = game.score();
            game.apply_action(action);
            let outcome = game.tick(elapsed, fast);

            prop_assert!(!game.active_collides());
            prop_assert!(game.arena().cells().iter().all(|&c| c <= 7));

            let score = game.score();
            prop_assert_eq!(score % rules.row_clear_score, 0);
            prop_assert!(score >= score_before || score == 0);

            if let Some(DropOutcome::Locked(_)) = outcome {
                prop_assert_eq!(game.drop_interval_ms(), rules.drop_interval_ms(score));
            }
            let _ = game.take_events();
        }
    }

    #[test]
    fn move_shifts_by_direction_or_not_at_all(
        seed in any::<u32>(),
        moves in prop::collection::vec(prop_oneof![Just(-1i32), Just(1i32)], 1..40),
    ) {
        let mut game = GameState::new(seed);
        for dir in moves {
            let before = game.position();
            let kept = game.move_piece(dir);
            let after = game.position();
            prop_assert_eq!(after.y, before.y);
            if kept {
                prop_assert_eq!(after.x, before.x + dir);
            } else {
                prop_assert_eq!(after, before);
            }
        }
    }

    #[test]
    fn collides_is_pure(
        seed in any::<u32>(),
        kind in kind_strategy(),
        x in -5i32..20,
        y in -5i32..35,
        drops in 0usize..60,
    ) {
        let mut game = GameState::new(seed);
        for _ in 0..drops {
            game.apply_action(GameAction::Drop);
        }
        let arena = game.arena().clone();
        let piece = shape_for(kind);
        let pos = Position::new(x, y);

        let first = collides(&arena, &piece, pos);
        prop_assert_eq!(collides(&arena, &piece, pos), first);
        prop_assert_eq!(game.arena(), &arena);
    }

    #[test]
    fn interval_curve_never_hits_zero(score in any::<u32>(), base in 1u32..5000) {
        let interval = drop_interval_for_score(base, 30, score);
        prop_assert!(interval >= 1);
        prop_assert!(interval <= base);
    }
}
