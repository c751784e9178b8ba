use crate::models::Week;

/// Download name for an exported week, e.g. `week-3-2024-01-15.json`.
/// A week saved without a usable start date is named by number alone.
pub fn export_file_name(week: &Week) -> String {
    match week.start_date() {
        Some(start) => format!("week-{}-{start}.json", week.week_number),
        None => format!("week-{}.json", week.week_number),
    }
}
