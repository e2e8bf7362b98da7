//! RNG oracle for reproducible enemy decisions.
//!
//! Enemies pick a random skill and a random living target. Rolls are derived
//! from the session seed and a roll counter, so a seed replays a battle
//! exactly and headless tests can pin outcomes.

/// RNG oracle: a stateless function from seed to value.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Uniform index in `0..len`. Returns 0 when `len <= 1`.
    fn pick_index(&self, seed: u64, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        (self.next_u32(seed) as usize) % len
    }
}

/// PCG random number generator (PCG-XSH-RR, 64-bit state, 32-bit output).
///
/// - Same seed always produces the same output
/// - One multiply, one xorshift, one rotate
///
/// Reference: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    /// `state' = state * multiplier + increment (mod 2^64)`
    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::output(Self::step(seed))
    }
}

/// Derives the seed of one battle from the session seed.
///
/// `battle` counts the battles started in the session, so every encounter
/// (and every retry after a defeat) rolls a fresh sequence.
pub fn battle_seed(session_seed: u64, battle: u64) -> u64 {
    compute_seed(session_seed, battle, u32::MAX, u32::MAX)
}

/// Compute a per-roll seed from session components.
///
/// # Arguments
///
/// * `session_seed` - Seed chosen when the session was created, or a
///   [`battle_seed`] derived from it
/// * `roll` - Monotonic roll counter of the battle
/// * `actor` - Roster index of the acting character
/// * `context` - Distinguishes independent rolls of one action
///   (`0`: skill choice, `1`: target choice)
pub fn compute_seed(session_seed: u64, roll: u64, actor: u32, context: u32) -> u64 {
    // SplitMix64 / FxHash style mixing
    let mut hash = session_seed;
    hash ^= roll.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (actor as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // Final avalanche
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
