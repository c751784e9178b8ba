//! Calendar rules for numbered weeks.
//!
//! Week `n` starts `7 * (n - 1)` days after the anchor date and spans
//! seven consecutive days.

use jiff::Span;
use jiff::civil::{Date, Weekday};

use crate::error::CoreError;
use crate::models::{Day, Lenient, Week};

pub const DAYS_PER_WEEK: i64 = 7;

pub fn check_week_number(week_number: u32) -> Result<u32, CoreError> {
    if week_number == 0 {
        return Err(CoreError::InvalidWeekNumber(week_number));
    }
    Ok(week_number)
}

fn add_days(date: Date, days: i64) -> Result<Date, CoreError> {
    let span = Span::new().try_days(days)?;
    Ok(date.checked_add(span)?)
}

pub fn week_start(anchor: Date, week_number: u32) -> Result<Date, CoreError> {
    check_week_number(week_number)?;
    add_days(anchor, DAYS_PER_WEEK * (i64::from(week_number) - 1))
}

pub fn week_end(anchor: Date, week_number: u32) -> Result<Date, CoreError> {
    add_days(week_start(anchor, week_number)?, DAYS_PER_WEEK - 1)
}

pub fn day_name(date: Date) -> &'static str {
    match date.weekday() {
        Weekday::Monday => "MONDAY",
        Weekday::Tuesday => "TUESDAY",
        Weekday::Wednesday => "WEDNESDAY",
        Weekday::Thursday => "THURSDAY",
        Weekday::Friday => "FRIDAY",
        Weekday::Saturday => "SATURDAY",
        Weekday::Sunday => "SUNDAY",
    }
}

/// Build a fresh week: seven empty days starting at the week's start date.
pub fn materialize_week(anchor: Date, week_number: u32) -> Result<Week, CoreError> {
    let start_date = week_start(anchor, week_number)?;
    let end_date = add_days(start_date, DAYS_PER_WEEK - 1)?;

    let days = (0..DAYS_PER_WEEK)
        .map(|offset| {
            let date = add_days(start_date, offset)?;
            Ok(Day::empty(date, day_name(date)))
        })
        .collect::<Result<Vec<_>, CoreError>>()?;

    Ok(Week {
        week_number,
        start_date: Some(Lenient::Typed(start_date)),
        end_date: Some(Lenient::Typed(end_date)),
        days,
        extra: serde_json::Map::new(),
    })
}

/// Today's date in the system time zone.
pub fn today() -> Date {
    jiff::Zoned::now().date()
}
