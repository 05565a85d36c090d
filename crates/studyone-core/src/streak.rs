//! Daily streak engine.
//!
//! Tracks consecutive calendar days on which the user completed a
//! qualifying action. Day comparisons use calendar-day granularity in the
//! caller-supplied "today" (the local device date); time of day never
//! matters. A gap is detected lazily on read, not repaired on write.

use std::collections::BTreeSet;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::storage::{keys, Store};

/// Persisted streak state.
///
/// Deserialization is lenient: any missing or malformed field collapses to
/// the default (no streak), so corrupt stored state reads as count 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StreakRecord {
    pub count: u32,
    pub last_date: Option<NaiveDate>,
    pub history: BTreeSet<NaiveDate>,
}

impl StreakRecord {
    /// Record the qualifying action for `today`.
    ///
    /// Idempotent within a day: once `last_date == today`, further calls
    /// change nothing. A completion on the day after `last_date` extends the
    /// streak; anything else (first ever completion, or a gap of two or
    /// more days) restarts it at 1.
    pub fn record_completion(&mut self, today: NaiveDate) {
        match self.last_date {
            Some(last) if last == today => return,
            Some(last) if Some(last) == today.checked_sub_days(Days::new(1)) => {
                self.count += 1;
            }
            _ => self.count = 1,
        }
        self.last_date = Some(today);
        self.history.insert(today);
    }

    /// Streak value to display for `today`.
    ///
    /// The stored count stays visible while `last_date` is today or
    /// yesterday (grace period, so the streak shows before today's action);
    /// older than yesterday displays as 0. Read-only: the stored record is
    /// never rewritten here.
    pub fn current_streak(&self, today: NaiveDate) -> u32 {
        match self.last_date {
            Some(last) if last == today => self.count,
            Some(last) if Some(last) == today.checked_sub_days(Days::new(1)) => self.count,
            _ => 0,
        }
    }

    /// Load from the store; malformed or absent state is the default record.
    ///
    /// # Errors
    /// Returns an error only if the store query fails.
    pub fn load(store: &Store) -> Result<Self> {
        Ok(store.get_json(keys::STREAK)?)
    }

    /// Persist to the store.
    ///
    /// # Errors
    /// Returns an error if the write fails.
    pub fn save(&self, store: &Store) -> Result<()> {
        store.put_json(keys::STREAK, self)?;
        Ok(())
    }
}
