use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A named training category and the exercises allowed under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusArea {
    pub id: String,
    pub name: String,
    pub exercises: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusAreas {
    pub weights: Vec<FocusArea>,
    pub other: Vec<FocusArea>,
}

/// The static focus-area config served at `/api/config`.
///
/// Loaded once at startup and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerConfig {
    pub focus_areas: FocusAreas,
}

impl TrackerConfig {
    /// All focus areas, weights first, then other.
    pub fn areas(&self) -> impl Iterator<Item = &FocusArea> {
        self.focus_areas
            .weights
            .iter()
            .chain(self.focus_areas.other.iter())
    }

    pub fn find(&self, id: &str) -> Option<&FocusArea> {
        self.areas().find(|area| area.id == id)
    }

    /// Focus area ids must be unique across both lists.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut seen = HashSet::new();
        for area in self.areas() {
            if !seen.insert(area.id.as_str()) {
                return Err(CoreError::DuplicateFocusArea(area.id.clone()));
            }
        }
        Ok(())
    }
}
