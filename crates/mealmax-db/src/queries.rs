//! Read-only catalog queries.

use crate::error::{Error, Result};
use crate::models::*;
use crate::store::Store;
use mealmax_core::{LeaderboardEntry, Meal, MealId, SortKey};
use tracing::debug;

impl Store {
    /// Get a live meal by ID.
    pub fn get_meal_by_id(&self, id: MealId) -> Result<Meal> {
        let r = self.db.r_transaction()?;
        let stored: Option<StoredMeal> = r.get().primary(id.raw())?;
        debug!(%id, found = stored.is_some(), "looked up meal by id");
        match stored {
            Some(s) if !s.deleted => Ok(s.to_meal()?),
            _ => Err(Error::NotFound(id)),
        }
    }

    /// Get a live meal by name.
    pub fn get_meal_by_name(&self, name: &str) -> Result<Meal> {
        let r = self.db.r_transaction()?;
        let stored: Option<StoredMeal> = r
            .get()
            .secondary(StoredMealKey::name, name.to_string())?;
        debug!(meal = name, found = stored.is_some(), "looked up meal by name");
        match stored {
            Some(s) if !s.deleted => Ok(s.to_meal()?),
            _ => Err(Error::NameNotFound(name.to_string())),
        }
    }

    /// Live meals ranked by `sort_by`, best first.
    ///
    /// Equal keys keep ascending id order. `limit` caps the number of rows.
    pub fn leaderboard(&self, sort_by: SortKey, limit: Option<usize>) -> Result<Vec<LeaderboardEntry>> {
        let r = self.db.r_transaction()?;
        let scan = r.scan().primary::<StoredMeal>()?;
        let iter = scan.all()?;
        let meals: std::result::Result<Vec<StoredMeal>, _> = iter.collect();
        let meals = meals.map_err(|e| Error::Database(e.to_string()))?;

        let mut entries = meals
            .into_iter()
            .filter(|m| !m.deleted)
            .map(|m| m.to_meal().map(|meal| LeaderboardEntry::from(&meal)))
            .collect::<mealmax_core::Result<Vec<_>>>()?;
        entries.sort_by(|a, b| sort_by.compare(a, b));
        if let Some(limit) = limit {
            entries.truncate(limit);
        }

        debug!(%sort_by, rows = entries.len(), "built leaderboard");
        Ok(entries)
    }
}
