//! Deterministic random number generation.
//!
//! Every random outcome in a game (attack rolls, disaster gambles, deck
//! sampling and pile shuffles) is drawn from the single [`GameRng`] owned by
//! the [`Game`](crate::game::Game). Nothing in the engine touches a global
//! generator, so a fixed seed plus a fixed sequence of decisions always
//! replays the same game.
//!
//! ```
//! use trade_winds::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.roll(0.5), b.roll(0.5));
//!
//! // Probabilities of 0 and 1 never consult luck.
//! assert!(a.roll(1.0));
//! assert!(!a.roll(0.0));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Seedable random source, ChaCha8 underneath.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this generator was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Succeed with the given probability.
    ///
    /// The probability is clamped to `[0, 1]`; the bounds are decided
    /// without drawing so forced outcomes leave the stream untouched.
    pub fn roll(&mut self, probability: f64) -> bool {
        if probability >= 1.0 {
            return true;
        }
        if probability <= 0.0 || probability.is_nan() {
            return false;
        }
        self.inner.gen::<f64>() < probability
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Draw `amount` distinct elements without replacement.
    ///
    /// Returns every element (in random order) when `amount` exceeds the
    /// slice length.
    pub fn sample<T: Clone>(&mut self, items: &[T], amount: usize) -> Vec<T> {
        let amount = amount.min(items.len());
        rand::seq::index::sample(&mut self.inner, items.len(), amount)
            .into_iter()
            .map(|i| items[i].clone())
            .collect()
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position so capture and restore cost the same no
/// matter how far the game has progressed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
