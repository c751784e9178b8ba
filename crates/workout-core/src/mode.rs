//! Strength vs. cardio set shapes, and the day-level edits the planner
//! form performs.
//!
//! A day's mode is never stored. It is derived from the selected focus
//! area: cardio iff the selection is [`CARDIO_FOCUS_ID`].

use serde_json::Map;

use crate::focus::{exercises_for_focus, selected_focus};
use crate::models::{Day, Exercise, SetEntry, TrackerConfig};

pub const CARDIO_FOCUS_ID: &str = "cardio";

pub const SETS_PER_EXERCISE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetMode {
    Strength,
    Cardio,
}

impl SetMode {
    pub fn for_focus<S: AsRef<str>>(focus_ids: &[S]) -> Self {
        if focus_ids.iter().any(|id| id.as_ref() == CARDIO_FOCUS_ID) {
            SetMode::Cardio
        } else {
            SetMode::Strength
        }
    }
}

impl SetEntry {
    pub fn blank(mode: SetMode) -> Self {
        match mode {
            SetMode::Strength => SetEntry::strength("", ""),
            SetMode::Cardio => SetEntry::cardio("", ""),
        }
    }

    /// Cardio when the set carries either cardio field, strength otherwise.
    pub fn mode(&self) -> SetMode {
        if self.get("time").is_some() || self.get("intensity").is_some() {
            SetMode::Cardio
        } else {
            SetMode::Strength
        }
    }
}

pub fn blank_sets(mode: SetMode) -> Vec<SetEntry> {
    vec![SetEntry::blank(mode); SETS_PER_EXERCISE]
}

impl Exercise {
    pub fn blank(name: impl Into<String>, mode: SetMode) -> Self {
        Self {
            name: name.into(),
            sets: blank_sets(mode),
            extra: Map::new(),
        }
    }
}

/// Outcome of changing a day's focus selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusChange {
    /// Sets were discarded because the mode flipped.
    pub mode_reset: bool,
    /// Exercise names cleared because the new focus no longer offers them.
    pub cleared_names: usize,
}

impl Day {
    pub fn mode(&self) -> SetMode {
        SetMode::for_focus(&self.focus_areas)
    }

    /// Apply a focus selection the way the planner form does.
    ///
    /// Switching between cardio and strength replaces every exercise's sets
    /// with fresh empty ones in the new shape. Names outside the new
    /// focus's exercise list are cleared; they are dropped on collection.
    pub fn select_focus(&mut self, config: &TrackerConfig, choice: Option<&str>) -> FocusChange {
        let before = self.mode();
        self.focus_areas = selected_focus(choice);
        let after = self.mode();

        let mode_reset = before != after;
        if mode_reset {
            for exercise in &mut self.exercises {
                exercise.sets = blank_sets(after);
            }
        }

        let allowed = exercises_for_focus(config, &self.focus_areas);
        let mut cleared_names = 0;
        for exercise in &mut self.exercises {
            if !exercise.name.is_empty() && !allowed.contains(&exercise.name) {
                exercise.name.clear();
                cleared_names += 1;
            }
        }

        FocusChange {
            mode_reset,
            cleared_names,
        }
    }

    /// Append an unnamed exercise row shaped for the current mode.
    pub fn add_exercise(&mut self) -> &mut Exercise {
        let mode = self.mode();
        self.exercises.push(Exercise::blank(String::new(), mode));
        let last = self.exercises.len() - 1;
        &mut self.exercises[last]
    }

    pub fn remove_exercise(&mut self, index: usize) -> Option<Exercise> {
        (index < self.exercises.len()).then(|| self.exercises.remove(index))
    }

    /// Drop rows with no exercise chosen, as happens when the form is
    /// collected for saving.
    pub fn retain_named_exercises(&mut self) {
        self.exercises.retain(|exercise| !exercise.name.is_empty());
    }
}
