//! Deterministic random number generator
//!
//! Uses a simple xorshift64 algorithm for reproducibility across platforms.
//! The same seed always replays the same sequence of battle draws.

use serde::{Deserialize, Serialize};

/// A deterministic random number generator
///
/// Stands in for the remote random service when battles must be
/// reproducible or run offline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRng {
    state: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        // Ensure non-zero state (xorshift requires this)
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Get the current state
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Generate the next raw u64 value
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Generate a random f64 in range [0, 1)
    pub fn next_f64(&mut self) -> f64 {
        // 53 significant bits so the result can never round up to 1.0
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.next_u64(), rng2.next_u64());
        }
    }

    #[test]
    fn test_zero_seed() {
        let mut rng = GameRng::new(0);
        assert_eq!(rng.state(), 1);
        assert_ne!(rng.next_u64(), 0);
    }

    #[test]
    fn test_range() {
        let mut rng = GameRng::new(42);

        for _ in 0..1000 {
            let f = rng.next_f64();
            assert!(f >= 0.0 && f < 1.0);
        }
    }
}
