use std::collections::BTreeSet;

use crate::models::TrackerConfig;

/// The client's explicit "no focus" choice. Never a real focus area.
pub const NONE_FOCUS_ID: &str = "none";

/// Exercises allowed for the given focus areas: the union of every matched
/// area's list, deduplicated and sorted. Unknown ids are skipped.
pub fn exercises_for_focus<S: AsRef<str>>(config: &TrackerConfig, focus_ids: &[S]) -> Vec<String> {
    let exercises: BTreeSet<&str> = focus_ids
        .iter()
        .filter_map(|id| config.find(id.as_ref()))
        .flat_map(|area| area.exercises.iter().map(String::as_str))
        .collect();

    exercises.into_iter().map(str::to_string).collect()
}

/// Turn a single-select choice into the stored `focusAreas` list.
pub fn selected_focus(choice: Option<&str>) -> Vec<String> {
    match choice {
        None | Some(NONE_FOCUS_ID) => Vec::new(),
        Some(id) => vec![id.to_string()],
    }
}
