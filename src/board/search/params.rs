#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fixed search depth used when nothing else is configured.
pub const DEFAULT_DEPTH: u32 = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchParams {
    /// Plies searched below the root (at least 1).
    pub depth: u32,
    /// Prune with alpha-beta; `false` searches the full negamax tree.
    pub alpha_beta: bool,
    /// Shuffle root moves so equally scored moves vary between games.
    pub shuffle_root: bool,
    /// Seed for the root shuffle; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            depth: DEFAULT_DEPTH,
            alpha_beta: true,
            shuffle_root: true,
            seed: None,
        }
    }
}

impl SearchParams {
    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Full-width negamax, no pruning and no shuffle; a reference for tests.
    #[must_use]
    pub fn full_width(depth: u32) -> Self {
        SearchParams {
            depth,
            alpha_beta: false,
            shuffle_root: false,
            seed: None,
        }
    }
}
