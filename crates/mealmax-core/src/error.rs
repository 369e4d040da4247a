//! Error types for mealmax-core

use crate::random::RandomError;
use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    /// A meal failed construction-time validation (price or tier).
    #[error("{0}")]
    Validation(String),

    #[error("Invalid result: {0}. Expected 'win' or 'loss'.")]
    InvalidOutcome(String),

    #[error("Invalid sort_by parameter: {0}. Expected 'wins' or 'win_pct'.")]
    InvalidSortKey(String),

    #[error("Combatant list is full, cannot add more combatants.")]
    RosterFull,

    #[error("Two combatants must be prepped for a battle.")]
    InsufficientCombatants,

    #[error(transparent)]
    Random(#[from] RandomError),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
