//! Meal records and the values attached to them

use crate::{Error, MealId, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Preparation difficulty of a meal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    #[serde(rename = "LOW")]
    Low,
    #[serde(rename = "MED")]
    Med,
    #[serde(rename = "HIGH")]
    High,
}

impl Tier {
    /// Wire name of the tier
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Low => "LOW",
            Tier::Med => "MED",
            Tier::High => "HIGH",
        }
    }

    /// Amount subtracted from a meal's battle score.
    ///
    /// Easier meals are penalised harder.
    pub fn penalty(&self) -> f64 {
        match self {
            Tier::High => 1.0,
            Tier::Med => 2.0,
            Tier::Low => 3.0,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "LOW" => Ok(Tier::Low),
            "MED" => Ok(Tier::Med),
            "HIGH" => Ok(Tier::High),
            _ => Err(Error::Validation(
                "Difficulty must be 'LOW', 'MED', or 'HIGH'.".to_string(),
            )),
        }
    }
}

/// Result of one side of a battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Loss,
}

impl Outcome {
    /// Wire name of the outcome
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "win",
            Outcome::Loss => "loss",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Outcome {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "win" => Ok(Outcome::Win),
            "loss" => Ok(Outcome::Loss),
            other => Err(Error::InvalidOutcome(other.to_string())),
        }
    }
}

/// A purchasable meal in the catalog
///
/// Other crates can only obtain one through [`Meal::new`], which enforces
/// the price invariant; the counters and delete flag are set afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[non_exhaustive]
pub struct Meal {
    /// Storage-assigned identifier
    pub id: MealId,
    /// Display name, unique across the catalog
    pub name: String,
    /// Free-form category label (e.g. a cuisine)
    pub category: String,
    /// Strictly positive price
    pub price: f64,
    pub tier: Tier,
    /// Soft-delete marker
    pub deleted: bool,
    pub battles: u64,
    pub wins: u64,
}

impl Meal {
    /// Create a new meal with zeroed battle counters.
    ///
    /// Fails with [`Error::Validation`] when `price` is not a positive number.
    pub fn new(
        id: MealId,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        tier: Tier,
    ) -> Result<Self> {
        validate_price(price)?;
        Ok(Self {
            id,
            name: name.into(),
            category: category.into(),
            price,
            tier,
            deleted: false,
            battles: 0,
            wins: 0,
        })
    }

    /// Percentage of battles won, rounded to one decimal place.
    ///
    /// A meal that never battled reports 0.
    pub fn win_pct(&self) -> f64 {
        if self.battles == 0 {
            return 0.0;
        }
        let pct = self.wins as f64 * 100.0 / self.battles as f64;
        (pct * 10.0).round() / 10.0
    }
}

/// Check the price invariant.
fn validate_price(price: f64) -> Result<()> {
    // NaN fails this comparison too
    if price > 0.0 && price.is_finite() {
        Ok(())
    } else {
        Err(Error::Validation("Price must be a positive value.".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_valid() {
        let meal = Meal::new(MealId::new(1), "Meal 1", "Cuisine 1", 12.5, Tier::Med).unwrap();
        assert_eq!(meal.price, 12.5);
        assert_eq!(meal.tier, Tier::Med);
        assert_eq!(meal.battles, 0);
        assert_eq!(meal.wins, 0);
        assert!(!meal.deleted);
    }

    #[test]
    fn test_meal_invalid_price() {
        for price in [-5.0, 0.0, f64::NAN, f64::INFINITY] {
            let err = Meal::new(MealId::new(1), "Meal 1", "Cuisine 1", price, Tier::Med)
                .unwrap_err();
            assert!(matches!(err, Error::Validation(_)));
            assert_eq!(err.to_string(), "Price must be a positive value.");
        }
    }

    #[test]
    fn test_tier_parse() {
        assert_eq!("LOW".parse::<Tier>().unwrap(), Tier::Low);
        assert_eq!("MED".parse::<Tier>().unwrap(), Tier::Med);
        assert_eq!("HIGH".parse::<Tier>().unwrap(), Tier::High);

        for bad in ["EASY", "low", "", "MEDIUM"] {
            let err = bad.parse::<Tier>().unwrap_err();
            assert!(matches!(err, Error::Validation(_)));
            assert_eq!(
                err.to_string(),
                "Difficulty must be 'LOW', 'MED', or 'HIGH'."
            );
        }
    }

    #[test]
    fn test_outcome_parse() {
        assert_eq!("win".parse::<Outcome>().unwrap(), Outcome::Win);
        assert_eq!("loss".parse::<Outcome>().unwrap(), Outcome::Loss);

        for bad in ["lost", "1", "WIN", " win"] {
            let err = bad.parse::<Outcome>().unwrap_err();
            assert!(matches!(err, Error::InvalidOutcome(_)));
        }
        assert_eq!(
            "lost".parse::<Outcome>().unwrap_err().to_string(),
            "Invalid result: lost. Expected 'win' or 'loss'."
        );
    }

    #[test]
    fn test_win_pct() {
        let mut meal = Meal::new(MealId::new(1), "Meal 1", "Cuisine 1", 10.0, Tier::Med).unwrap();
        assert_eq!(meal.win_pct(), 0.0);

        meal.battles = 5;
        meal.wins = 3;
        assert_eq!(meal.win_pct(), 60.0);

        meal.battles = 3;
        meal.wins = 2;
        assert_eq!(meal.win_pct(), 66.7);
    }

    #[test]
    fn test_tier_wire_names() {
        let text = ron::to_string(&Tier::High).unwrap();
        assert_eq!(text, "HIGH");
        assert_eq!(Tier::Low.to_string(), "LOW");
        assert_eq!(Outcome::Win.to_string(), "win");
    }
}
