//! Deterministic random picks.
//!
//! Randomness in the rules (which task the product owner hands out) must be
//! reproducible from the session seed so that a replayed command log yields
//! the same snapshots.

/// RNG oracle for deterministic random number generation.
///
/// Implementations must produce the same value for the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Generate a random value in range [min, max] inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let range = max - min + 1;
        min + (self.next_u32(seed) % range)
    }

    /// Picks a uniformly distributed index into a collection of `len` elements.
    ///
    /// Returns `None` for an empty collection.
    fn pick_index(&self, seed: u64, len: usize) -> Option<usize> {
        match len {
            0 => None,
            len => Some(self.range(seed, 0, (len - 1) as u32) as usize),
        }
    }
}

/// PCG-XSH-RR generator: 64-bit LCG state, 32-bit permuted output.
///
/// Stateless from the caller's point of view: each call derives its output
/// from the provided seed only.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::pcg_output(Self::pcg_step(seed))
    }
}

/// Derives the seed for one random decision.
///
/// * `game_seed` - session seed fixed at start
/// * `nonce` - number of commands applied before this one
/// * `subject` - who is deciding (e.g. the NPC index)
/// * `context` - distinguishes several rolls within the same command
pub fn compute_seed(game_seed: u64, nonce: u64, subject: u32, context: u32) -> u64 {
    let mut hash = game_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (subject as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // avalanche
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
