//! Property-based tests using proptest.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::snapshot;
use crate::board::{Position, SearchParams, Searcher};

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=30usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `plies` random legal moves; returns how many were played.
fn random_playout(position: &mut Position, rng: &mut StdRng, plies: usize) -> usize {
    for played in 0..plies {
        let moves = position.legal_moves();
        let Some(&mv) = moves.choose(rng) else {
            return played;
        };
        position.apply_move(mv);
    }
    plies
}

proptest! {
    /// Property: apply_move followed by undo_last_move restores the position exactly
    #[test]
    fn prop_apply_undo_restores_state(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut position = Position::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let initial = snapshot(&position);

        let played = random_playout(&mut position, &mut rng, num_moves);
        prop_assert!(position.king_cache_consistent());

        for _ in 0..played {
            prop_assert!(position.undo_last_move().is_some());
        }
        prop_assert_eq!(snapshot(&position), initial);
        prop_assert_eq!(position.undo_last_move(), None);
    }

    /// Property: no legal move leaves the mover's king attacked
    #[test]
    fn prop_legal_moves_keep_king_safe(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut position = Position::new();
        let mut rng = StdRng::seed_from_u64(seed);
        random_playout(&mut position, &mut rng, num_moves);

        for mv in position.legal_moves() {
            position.apply_move(mv);
            let mover = mv.color();
            prop_assert!(
                !position.is_square_attacked(position.king_square(mover), mover.opponent()),
                "{} leaves the king attacked in {}", mv, position.to_fen()
            );
            position.undo_last_move();
        }
    }

    /// Property: terminal flags agree with the legal move list and check state
    #[test]
    fn prop_terminal_flags_consistent(seed in seed_strategy(), num_moves in 1..=80usize) {
        let mut position = Position::new();
        let mut rng = StdRng::seed_from_u64(seed);
        random_playout(&mut position, &mut rng, num_moves);

        let moves = position.legal_moves();
        prop_assert!(!(position.in_checkmate() && position.in_stalemate()));
        if moves.is_empty() {
            prop_assert_eq!(position.in_checkmate(), position.in_check());
            prop_assert_eq!(position.in_stalemate(), !position.in_check());
        } else {
            prop_assert!(!position.in_checkmate());
            prop_assert!(!position.in_stalemate());
        }
    }

    /// Property: a position survives a FEN round trip
    #[test]
    fn prop_fen_round_trip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut position = Position::new();
        let mut rng = StdRng::seed_from_u64(seed);
        random_playout(&mut position, &mut rng, num_moves);

        let fen = position.to_fen();
        let mut reloaded = Position::from_fen(&fen).unwrap();
        let reloaded_fen = reloaded.to_fen();
        prop_assert_eq!(reloaded_fen.split(' ').take(4).collect::<Vec<_>>(),
                        fen.split(' ').take(4).collect::<Vec<_>>());
        prop_assert_eq!(reloaded.legal_moves(), position.legal_moves());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    /// Property: alpha-beta returns the full-width negamax score
    #[test]
    fn prop_alpha_beta_is_sound(seed in seed_strategy(), num_moves in 0..=16usize) {
        let mut position = Position::new();
        let mut rng = StdRng::seed_from_u64(seed);
        random_playout(&mut position, &mut rng, num_moves);
        let moves = position.legal_moves();

        let full = Searcher::new(SearchParams::full_width(2)).search(&mut position, &moves);
        let pruned = Searcher::new(SearchParams {
            shuffle_root: false,
            ..SearchParams::default().with_depth(2)
        })
        .search(&mut position, &moves);

        prop_assert_eq!(pruned.score, full.score);
        prop_assert!(pruned.nodes <= full.nodes);
    }
}
