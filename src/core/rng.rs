//! Secret Number Generator
//!
//! Xorshift128+ PRNG used to draw each session's secret.
//! Seeded either from a fixed value (reproducible games) or from a
//! SHA-256 derivation over a fresh session id.

use serde::Serialize;
use sha2::{Sha256, Digest};

/// Domain separator for seed derivation.
const SEED_DOMAIN: &[u8] = b"GUESS_GAME_SEED_V1";

/// PRNG for drawing secrets.
///
/// # Example
///
/// ```
/// use guess_game::core::rng::SecretRng;
///
/// let mut rng = SecretRng::new(42);
/// let secret = rng.next_int_range(1, 100);
/// assert_eq!(secret, 5); // Same seed, same secret
/// ```
#[derive(Clone, Debug, Serialize)]
pub struct SecretRng {
    state: [u64; 2],
}

impl Default for SecretRng {
    fn default() -> Self {
        Self::new(0)
    }
}

impl SecretRng {
    /// Create a new RNG from a 64-bit seed.
    ///
    /// SplitMix64 spreads the seed over both state words, so small or
    /// sequential seeds still give independent streams.
    pub fn new(seed: u64) -> Self {
        let mut s = seed;
        let state0 = splitmix64(&mut s);
        let state1 = splitmix64(&mut s);

        // All-zero state is a fixed point of xorshift
        let state = if state0 == 0 && state1 == 0 {
            [1, 1]
        } else {
            [state0, state1]
        };

        Self { state }
    }

    /// Create an RNG seeded from a session id.
    pub fn for_session(session_id: &[u8; 16], nonce: u64) -> Self {
        Self::new(derive_session_seed(session_id, nonce))
    }

    /// Generate the next 64-bit random value.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let s0 = self.state[0];
        let mut s1 = self.state[1];
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.state[0] = s0.rotate_left(24) ^ s1 ^ (s1 << 16);
        self.state[1] = s1.rotate_left(37);

        result
    }

    /// Generate a uniform integer in `[0, max)`.
    ///
    /// Values below `2^64 mod max` are rejected so every residue is
    /// equally likely.
    pub fn next_int(&mut self, max: u64) -> u64 {
        if max == 0 {
            return 0;
        }
        let threshold = max.wrapping_neg() % max;
        loop {
            let value = self.next_u64();
            if value >= threshold {
                return value % max;
            }
        }
    }

    /// Generate a uniform integer in `[min, max]`.
    pub fn next_int_range(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        let span = (i64::from(max) - i64::from(min) + 1) as u64;
        (i64::from(min) + self.next_int(span) as i64) as i32
    }
}

/// SplitMix64 step for seed initialization.
#[inline]
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

/// Derive a seed from a session id and a nonce.
///
/// The first 8 bytes of `SHA256(domain || session_id || nonce)`, read
/// little-endian.
pub fn derive_session_seed(session_id: &[u8; 16], nonce: u64) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(SEED_DOMAIN);
    hasher.update(session_id);
    hasher.update(nonce.to_le_bytes());
    let hash = hasher.finalize();

    let mut seed = [0u8; 8];
    seed.copy_from_slice(&hash[..8]);
    u64::from_le_bytes(seed)
}

// =============================================================================
// TESTS
// =============================================================================
