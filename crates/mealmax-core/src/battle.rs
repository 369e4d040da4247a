//! Two-meal battle engine
//!
//! A `BattleModel` holds at most two prepped meals. Resolving a battle scores
//! both, draws one value from a [`RandomSource`], reports the result of each
//! side through a [`StatsRecorder`] and keeps only the winner in the roster.
//!
//! The draw is compared against the normalised score gap
//! `min(|score_a - score_b| / 100, 1)`: the first combatant wins when the gap
//! exceeds the draw, the second one otherwise. Exactly equal scores always go
//! to the first combatant.

use crate::{Error, Meal, MealId, Outcome, RandomSource};
use tracing::{debug, info, warn};

/// Maximum number of meals a roster can hold
pub const MAX_COMBATANTS: usize = 2;

/// Sink for battle results, implemented by the catalog store.
pub trait StatsRecorder {
    /// Error type of the recorder. Engine failures are lifted into it.
    type Error: From<Error>;

    /// Count one battle for `id`, and one win when `outcome` is a win.
    fn record_outcome(&self, id: MealId, outcome: Outcome) -> Result<(), Self::Error>;
}

/// Deterministic battle score of a meal.
///
/// `price * category length (in characters) - tier penalty`.
pub fn battle_score(meal: &Meal) -> f64 {
    let length = meal.category.chars().count() as f64;
    meal.price * length - meal.tier.penalty()
}

/// Transient roster of up to two combatants.
///
/// Not synchronised: callers keep one instance per session.
#[derive(Debug, Clone, Default)]
pub struct BattleModel {
    combatants: Vec<Meal>,
}

impl BattleModel {
    /// Create an empty roster
    pub fn new() -> Self {
        Self {
            combatants: Vec::with_capacity(MAX_COMBATANTS),
        }
    }

    /// Append a combatant, keeping insertion order.
    pub fn prep_combatant(&mut self, meal: Meal) -> crate::Result<()> {
        if self.combatants.len() >= MAX_COMBATANTS {
            warn!(meal = %meal.name, "roster is full");
            return Err(Error::RosterFull);
        }
        info!(meal = %meal.name, id = %meal.id, "prepped combatant");
        self.combatants.push(meal);
        Ok(())
    }

    /// Empty the roster.
    pub fn clear_combatants(&mut self) {
        debug!(count = self.combatants.len(), "clearing combatants");
        self.combatants.clear();
    }

    /// Current combatants in prep order.
    pub fn combatants(&self) -> &[Meal] {
        &self.combatants
    }

    /// Resolve a battle between the two prepped combatants.
    ///
    /// Both sides are reported to `stats` even if the first report fails; the
    /// first failure is returned and the roster is left untouched. On success
    /// the loser is evicted and the winner's name returned.
    pub fn battle<S, R>(&mut self, stats: &S, random: &mut R) -> Result<String, S::Error>
    where
        S: StatsRecorder + ?Sized,
        R: RandomSource + ?Sized,
    {
        let [first, second] = self.combatants.as_slice() else {
            warn!(count = self.combatants.len(), "battle requested without two combatants");
            return Err(Error::InsufficientCombatants.into());
        };

        let score_1 = battle_score(first);
        let score_2 = battle_score(second);
        debug!(
            first = %first.name, score_1,
            second = %second.name, score_2,
            "scored combatants"
        );

        let delta = ((score_1 - score_2).abs() / 100.0).min(1.0);
        let draw = random.fetch().map_err(Error::from)?;
        debug!(delta, draw, "drew battle threshold");

        let first_wins = score_1 == score_2 || delta > draw;
        let (winner_idx, loser_idx) = if first_wins { (0, 1) } else { (1, 0) };
        let winner = &self.combatants[winner_idx];
        let loser = &self.combatants[loser_idx];

        let won = stats.record_outcome(winner.id, Outcome::Win);
        let lost = stats.record_outcome(loser.id, Outcome::Loss);
        won?;
        lost?;

        info!(winner = %winner.name, loser = %loser.name, "battle resolved");
        self.combatants.remove(loser_idx);
        Ok(self.combatants[0].name.clone())
    }
}
