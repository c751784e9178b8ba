use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::week::Week;
use crate::error::CoreError;
use crate::schedule;

/// The persisted tracker document: a global anchor date plus every week
/// materialized or saved so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDatabase {
    /// Anchor for weeks materialized from now on. Weeks already stored
    /// keep the dates they were created with.
    pub start_date: Date,
    #[serde(default)]
    pub weeks: Vec<Week>,
}

impl WorkoutDatabase {
    pub fn new(start_date: Date) -> Self {
        Self {
            start_date,
            weeks: Vec::new(),
        }
    }

    pub fn week(&self, week_number: u32) -> Option<&Week> {
        self.weeks.iter().find(|w| w.week_number == week_number)
    }

    pub fn week_position(&self, week_number: u32) -> Option<usize> {
        self.weeks.iter().position(|w| w.week_number == week_number)
    }

    /// Return the stored week, or build it from the current anchor and
    /// append it. The flag is `true` when the week was created.
    ///
    /// An existing week is returned as stored, even if the anchor has
    /// moved since it was created.
    pub fn get_or_materialize(&mut self, week_number: u32) -> Result<(Week, bool), CoreError> {
        schedule::check_week_number(week_number)?;
        if let Some(week) = self.week(week_number) {
            return Ok((week.clone(), false));
        }

        let week = schedule::materialize_week(self.start_date, week_number)?;
        self.weeks.push(week.clone());
        Ok((week, true))
    }

    /// Whole-week replacement keyed by `week_number`. Replaces in place,
    /// or appends when the week was never stored. No merge.
    pub fn replace_week(&mut self, week_number: u32, mut week: Week) -> Result<(), CoreError> {
        schedule::check_week_number(week_number)?;
        week.week_number = week_number;
        match self.week_position(week_number) {
            Some(index) => self.weeks[index] = week,
            None => self.weeks.push(week),
        }
        Ok(())
    }
}
