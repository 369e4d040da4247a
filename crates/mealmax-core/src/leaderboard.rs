//! Ranked, read-only projections of the catalog

use crate::{Error, Meal, MealId, Result, Tier};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Column a leaderboard is ranked by (always descending)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Wins,
    WinPct,
}

impl SortKey {
    /// Wire name of the sort key
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Wins => "wins",
            SortKey::WinPct => "win_pct",
        }
    }

    /// Descending order of two entries under this key.
    pub fn compare(&self, a: &LeaderboardEntry, b: &LeaderboardEntry) -> Ordering {
        match self {
            SortKey::Wins => b.wins.cmp(&a.wins),
            SortKey::WinPct => b.win_pct.total_cmp(&a.win_pct),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "wins" => Ok(SortKey::Wins),
            "win_pct" => Ok(SortKey::WinPct),
            other => Err(Error::InvalidSortKey(other.to_string())),
        }
    }
}

/// One leaderboard row: a meal plus its derived win percentage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: MealId,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub tier: Tier,
    pub battles: u64,
    pub wins: u64,
    /// Percentage (0-100) rounded to one decimal place
    pub win_pct: f64,
}

impl From<&Meal> for LeaderboardEntry {
    fn from(meal: &Meal) -> Self {
        Self {
            id: meal.id,
            name: meal.name.clone(),
            category: meal.category.clone(),
            price: meal.price,
            tier: meal.tier,
            battles: meal.battles,
            wins: meal.wins,
            win_pct: meal.win_pct(),
        }
    }
}
