//! Meal models for database storage.

use mealmax_core::{Meal, MealId, Tier};
use native_db::*;
use native_model::{native_model, Model};
use serde::{Deserialize, Serialize};

/// Key of the single meal id sequence row.
pub const MEAL_SEQUENCE: &str = "meals";

/// Stored meal row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[native_model(id = 1, version = 1)]
#[native_db]
pub struct StoredMeal {
    /// Primary key - meal ID.
    #[primary_key]
    pub id: u64,
    /// Display name, unique over every row including deleted ones.
    #[secondary_key(unique)]
    pub name: String,
    pub category: String,
    pub price: f64,
    pub tier: Tier,
    /// Soft-delete marker.
    pub deleted: bool,
    pub battles: u64,
    pub wins: u64,
}

impl StoredMeal {
    /// Create from a validated Meal.
    pub fn from_meal(meal: &Meal) -> Self {
        Self {
            id: meal.id.raw(),
            name: meal.name.clone(),
            category: meal.category.clone(),
            price: meal.price,
            tier: meal.tier,
            deleted: meal.deleted,
            battles: meal.battles,
            wins: meal.wins,
        }
    }

    /// Convert to a Meal, re-checking the price of the stored row.
    pub fn to_meal(&self) -> mealmax_core::Result<Meal> {
        let mut meal = Meal::new(
            MealId::new(self.id),
            self.name.clone(),
            self.category.clone(),
            self.price,
            self.tier,
        )?;
        meal.deleted = self.deleted;
        meal.battles = self.battles;
        meal.wins = self.wins;
        Ok(meal)
    }
}

/// Next id to hand out for a table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[native_model(id = 2, version = 1)]
#[native_db]
pub struct StoredSequence {
    /// Table name.
    #[primary_key]
    pub id: String,
    /// Next unused id.
    pub next: u64,
}

impl StoredSequence {
    /// Start a sequence at 1.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            next: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(price: f64) -> StoredMeal {
        StoredMeal {
            id: 3,
            name: "Meal 3".to_string(),
            category: "Cuisine".to_string(),
            price,
            tier: Tier::High,
            deleted: true,
            battles: 4,
            wins: 1,
        }
    }

    #[test]
    fn test_to_meal_keeps_counters() {
        let meal = row(12.0).to_meal().unwrap();
        assert_eq!(meal.id, MealId::new(3));
        assert_eq!(meal.price, 12.0);
        assert!(meal.deleted);
        assert_eq!((meal.battles, meal.wins), (4, 1));
    }

    #[test]
    fn test_to_meal_rejects_invalid_price() {
        for price in [0.0, -1.0] {
            let err = row(price).to_meal().unwrap_err();
            assert!(matches!(err, mealmax_core::Error::Validation(_)));
        }
    }
}
