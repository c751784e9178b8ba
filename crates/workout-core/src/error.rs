use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid week number: {0} (weeks are numbered from 1)")]
    InvalidWeekNumber(u32),

    #[error("date out of range: {0}")]
    DateOutOfRange(#[from] jiff::Error),

    #[error("duplicate focus area id: {0}")]
    DuplicateFocusArea(String),
}
