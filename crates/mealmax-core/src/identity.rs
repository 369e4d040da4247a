//! Identity type for catalog rows

use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage-assigned identifier of a meal
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MealId(pub u64);

impl MealId {
    /// Create a new meal ID
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for MealId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for MealId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}
