//! MealMax DB - Meal catalog store using native_db
//!
//! Provides persistent storage for:
//! - Meal records with soft-delete
//! - Per-meal battle and win counters
//! - Ranked leaderboard projections
//!
//! The `Store` implements `mealmax_core::StatsRecorder`, so it can be handed
//! straight to `BattleModel::battle`.

mod error;
mod models;
mod queries;
mod store;

pub use error::{Error, Result};
pub use store::Store;
