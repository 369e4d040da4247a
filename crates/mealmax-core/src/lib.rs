//! MealMax Core - Meal catalog domain and battle engine
//!
//! This crate provides the storage-independent half of MealMax:
//! - Meal records with construction-time validation (`Meal`, `Tier`)
//! - Battle outcomes and leaderboard projections (`Outcome`, `SortKey`, `LeaderboardEntry`)
//! - The `RandomSource` capability consumed when a battle is resolved
//! - A deterministic xorshift source (`GameRng`) for offline battles
//! - The two-slot battle engine (`BattleModel`)
//!
//! ## Battles
//!
//! The engine never talks to storage directly. Outcomes are reported through
//! the `StatsRecorder` seam, which the catalog store implements:
//! ```ignore
//! let mut battle = BattleModel::new();
//! battle.prep_combatant(store.get_meal_by_name("Pad Thai")?)?;
//! battle.prep_combatant(store.get_meal_by_name("Ramen")?)?;
//! let winner = battle.battle(&store, &mut GameRng::new(7))?;
//! ```

mod battle;
mod error;
mod identity;
mod leaderboard;
mod meal;
mod random;
mod rng;

pub use battle::{battle_score, BattleModel, StatsRecorder, MAX_COMBATANTS};
pub use error::{Error, Result};
pub use identity::MealId;
pub use leaderboard::{LeaderboardEntry, SortKey};
pub use meal::{Meal, Outcome, Tier};
pub use random::{RandomError, RandomSource};
pub use rng::GameRng;
