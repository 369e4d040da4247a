//! External randomness consumed by battles

use crate::GameRng;
use thiserror::Error;

/// Failures of a random draw
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RandomError {
    #[error("Request to random.org timed out.")]
    Timeout,

    #[error("Request to random.org failed: {0}")]
    Network(String),

    #[error("Invalid response from random.org: {0}")]
    BadResponse(String),
}

/// Source of a single value in `[0, 1)` per call.
///
/// Implementations are expected to enforce their own deadlines and report
/// them as [`RandomError::Timeout`]. A remote value outside `[0, 1)` is a
/// [`RandomError::BadResponse`].
pub trait RandomSource {
    /// Draw one value.
    fn fetch(&mut self) -> Result<f64, RandomError>;
}

impl RandomSource for GameRng {
    fn fetch(&mut self) -> Result<f64, RandomError> {
        Ok(self.next_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_rng_source_in_range() {
        let mut rng = GameRng::new(42);
        for _ in 0..100 {
            let f = rng.fetch().unwrap();
            assert!((0.0..1.0).contains(&f));
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            RandomError::Timeout.to_string(),
            "Request to random.org timed out."
        );
        assert_eq!(
            RandomError::Network("Network error".into()).to_string(),
            "Request to random.org failed: Network error"
        );
        assert_eq!(
            RandomError::BadResponse("invalid_number".into()).to_string(),
            "Invalid response from random.org: invalid_number"
        );
    }
}
