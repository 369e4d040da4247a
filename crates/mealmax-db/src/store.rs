//! Database store wrapper.

use crate::error::{Error, Result};
use crate::models::*;
use mealmax_core::{Meal, MealId, Outcome, StatsRecorder, Tier};
use native_db::*;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, info, warn};

// Static models for the database
static MODELS: LazyLock<Models> = LazyLock::new(|| {
    let mut models = Models::new();
    models.define::<StoredMeal>().unwrap();
    models.define::<StoredSequence>().unwrap();
    models
});

/// Persistent meal catalog.
pub struct Store {
    pub(crate) db: Database<'static>,
}

impl Store {
    /// Open or create a database at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db = Builder::new()
            .create(&MODELS, path.as_ref())
            .map_err(|e| Error::Database(e.to_string()))?;
        debug!(path = %path.as_ref().display(), "opened meal catalog");
        Ok(Self { db })
    }

    /// Create an in-memory database.
    pub fn in_memory() -> Result<Self> {
        let db = Builder::new()
            .create_in_memory(&MODELS)
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(Self { db })
    }

    /// Add a new meal with zeroed counters and return its id.
    ///
    /// Price is validated before storage is touched. A name already used by
    /// any row, deleted or not, fails with [`Error::DuplicateName`].
    pub fn create_meal(&self, name: &str, category: &str, price: f64, tier: Tier) -> Result<MealId> {
        let mut meal = Meal::new(MealId::new(0), name, category, price, tier)?;

        let rw = self.db.rw_transaction()?;
        let mut sequence = rw
            .get()
            .primary::<StoredSequence>(MEAL_SEQUENCE.to_string())?
            .unwrap_or_else(|| StoredSequence::new(MEAL_SEQUENCE));

        let id = MealId::new(sequence.next);
        meal.id = id;
        match rw.insert(StoredMeal::from_meal(&meal)) {
            Ok(()) => {}
            Err(native_db::db_type::Error::DuplicateKey { .. }) => {
                warn!(meal = name, "duplicate meal name");
                return Err(Error::DuplicateName(name.to_string()));
            }
            Err(e) => return Err(e.into()),
        }

        sequence.next += 1;
        rw.upsert(sequence)?;
        rw.commit()?;

        info!(meal = name, %id, "created meal");
        Ok(id)
    }

    /// Soft-delete a meal.
    ///
    /// The row stays in storage with its counters; a second delete fails with
    /// [`Error::AlreadyDeleted`].
    pub fn delete_meal(&self, id: MealId) -> Result<()> {
        let rw = self.db.rw_transaction()?;
        let mut stored = Self::active_row(rw.get().primary::<StoredMeal>(id.raw())?, id)?;

        stored.deleted = true;
        rw.upsert(stored)?;
        rw.commit()?;

        info!(%id, "deleted meal");
        Ok(())
    }

    /// Count one battle for a meal, and one win when `outcome` is a win.
    pub fn record_outcome(&self, id: MealId, outcome: Outcome) -> Result<()> {
        let rw = self.db.rw_transaction()?;
        let mut stored = Self::active_row(rw.get().primary::<StoredMeal>(id.raw())?, id)?;

        stored.battles += 1;
        if outcome == Outcome::Win {
            stored.wins += 1;
        }
        rw.upsert(stored)?;
        rw.commit()?;

        info!(%id, %outcome, "updated meal stats");
        Ok(())
    }

    /// Record a battle result given by its wire name (`win` or `loss`).
    ///
    /// The meal is checked before the result is parsed, so a deleted meal
    /// reports [`Error::AlreadyDeleted`] whatever `result` holds.
    pub fn update_meal_stats(&self, id: MealId, result: &str) -> Result<()> {
        {
            let r = self.db.r_transaction()?;
            Self::active_row(r.get().primary::<StoredMeal>(id.raw())?, id)?;
        }
        let outcome = result.parse::<Outcome>().inspect_err(|_| {
            warn!(%id, result, "rejected battle result");
        })?;
        self.record_outcome(id, outcome)
    }

    /// Remove every meal and restart ids at 1.
    pub fn clear_meals(&self) -> Result<()> {
        // First, collect all meal IDs
        let meal_ids: Vec<u64> = {
            let r = self.db.r_transaction()?;
            let scan = r.scan().primary::<StoredMeal>()?;
            let iter = scan.all()?;
            let meals: std::result::Result<Vec<StoredMeal>, _> = iter.collect();
            let meals = meals.map_err(|e| Error::Database(e.to_string()))?;
            meals.into_iter().map(|m| m.id).collect()
        };

        // Now delete in a separate transaction
        let rw = self.db.rw_transaction()?;
        for id in &meal_ids {
            if let Some(meal) = rw.get().primary::<StoredMeal>(*id)? {
                rw.remove(meal)?;
            }
        }
        if let Some(sequence) = rw.get().primary::<StoredSequence>(MEAL_SEQUENCE.to_string())? {
            rw.remove(sequence)?;
        }
        rw.commit()?;

        info!(removed = meal_ids.len(), "cleared meal catalog");
        Ok(())
    }

    /// Reject missing and soft-deleted rows before a mutation.
    fn active_row(stored: Option<StoredMeal>, id: MealId) -> Result<StoredMeal> {
        match stored {
            None => {
                warn!(%id, "meal not found");
                Err(Error::NotFound(id))
            }
            Some(s) if s.deleted => {
                warn!(%id, "meal has been deleted");
                Err(Error::AlreadyDeleted(id))
            }
            Some(s) => Ok(s),
        }
    }
}

impl StatsRecorder for Store {
    type Error = Error;

    fn record_outcome(&self, id: MealId, outcome: Outcome) -> Result<()> {
        Store::record_outcome(self, id, outcome)
    }
}

impl From<native_db::db_type::Error> for Error {
    fn from(err: native_db::db_type::Error) -> Self {
        Error::Database(err.to_string())
    }
}
