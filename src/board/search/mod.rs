//! Fixed-depth negamax search with alpha-beta pruning.
//!
//! The search walks a single `Position` in place: every child is reached by
//! `apply_move` and left by `undo_last_move`, so the position handed in is
//! restored before `search` returns. Results travel back up the recursion in
//! `SearchResult` values; there is no shared mutable search state.

mod move_order;
mod params;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::eval::{score_to_pawns, SCORE_INFINITY};
use super::{Move, MoveList, Position};

use move_order::order_moves;
pub use params::{SearchParams, DEFAULT_DEPTH};

/// Outcome of a search (or of one subtree of it).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Best root move; `None` only when there were no legal moves.
    pub best_move: Option<Move>,
    /// Score from the side to move's point of view.
    pub score: i32,
    /// Nodes visited, leaves included.
    pub nodes: u64,
    /// Depth the search was run to.
    pub depth: u32,
}

/// Move picker for the automated side.
pub struct Searcher {
    params: SearchParams,
    rng: StdRng,
}

impl Searcher {
    #[must_use]
    pub fn new(params: SearchParams) -> Self {
        let rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Searcher { params, rng }
    }

    /// Pick a move among `legal_moves`, which must be the legal moves of
    /// `position`. The position is left exactly as it was given.
    pub fn search(&mut self, position: &mut Position, legal_moves: &[Move]) -> SearchResult {
        let depth = self.params.depth.max(1);

        let mut root: MoveList = legal_moves.to_vec();
        if self.params.shuffle_root {
            root.shuffle(&mut self.rng);
        }

        let multiplier = position.side_to_move().sign();
        let mut result = self.negamax(
            position,
            root,
            depth,
            0,
            -SCORE_INFINITY,
            SCORE_INFINITY,
            multiplier,
        );
        result.depth = depth;

        if result.best_move.is_none() {
            if let Some(&first) = legal_moves.first() {
                log::warn!("search recorded no best move; falling back to {first}");
                result.best_move = Some(first);
            }
        }

        if let Some(best) = result.best_move {
            log::info!(
                "depth {} best {} ({}) score {:.4} nodes {}",
                depth,
                best,
                best.coordinate_notation(),
                score_to_pawns(result.score),
                result.nodes
            );
        }
        result
    }

    /// Score `moves` (the legal moves of `position`) from the perspective
    /// selected by `multiplier` (+1 White, -1 Black).
    #[allow(clippy::too_many_arguments)]
    fn negamax(
        &self,
        position: &mut Position,
        moves: MoveList,
        depth: u32,
        ply: usize,
        mut alpha: i32,
        beta: i32,
        multiplier: i32,
    ) -> SearchResult {
        // No moves: the evaluator already sees the mate/stalemate flags.
        if depth == 0 || moves.is_empty() {
            return SearchResult {
                best_move: None,
                score: multiplier * position.evaluate(),
                nodes: 1,
                depth,
            };
        }

        let mut best = SearchResult {
            best_move: None,
            score: -SCORE_INFINITY,
            nodes: 1,
            depth,
        };

        for mv in order_moves(position, moves) {
            position.apply_move(mv);
            let replies = position.legal_moves();
            let child = self.negamax(
                position,
                replies,
                depth - 1,
                ply + 1,
                -beta,
                -alpha,
                -multiplier,
            );
            position.undo_last_move();

            best.nodes += child.nodes;
            let score = -child.score;
            if score > best.score {
                best.score = score;
                if ply == 0 {
                    best.best_move = Some(mv);
                    log::debug!("root {} scores {:.4}", mv, score_to_pawns(score));
                }
            }

            if self.params.alpha_beta {
                if best.score > alpha {
                    alpha = best.score;
                }
                if alpha >= beta {
                    break;
                }
            }
        }

        best
    }
}

/// Pick a move with the default parameters (depth 3, shuffled root).
///
/// Returns `None` only when `legal_moves` is empty.
pub fn find_best_move(position: &mut Position, legal_moves: &[Move]) -> Option<Move> {
    Searcher::new(SearchParams::default())
        .search(position, legal_moves)
        .best_move
}
