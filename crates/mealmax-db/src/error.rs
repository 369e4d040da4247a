//! Error types for catalog operations.

use mealmax_core::MealId;
use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Native DB error.
    #[error("Database error: {0}")]
    Database(String),

    /// Another meal already uses this name.
    #[error("Meal with name '{0}' already exists")]
    DuplicateName(String),

    /// No meal with this ID, or it was soft-deleted.
    #[error("Meal with ID {0} not found")]
    NotFound(MealId),

    /// No meal with this name, or it was soft-deleted.
    #[error("Meal with name {0} not found")]
    NameNotFound(String),

    /// The meal was soft-deleted and can no longer change.
    #[error("Meal with ID {0} has been deleted")]
    AlreadyDeleted(MealId),

    /// Validation, parsing and battle errors from the domain layer.
    #[error(transparent)]
    Core(#[from] mealmax_core::Error),
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, Error>;
