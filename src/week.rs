// Monday-start week window helpers.
//
// The window is always recomputed from its anchor date at call time; it is
// never stored anywhere.
use chrono::{Datelike, Duration, NaiveDate};

/// Returns the Monday on or before `day`.
pub fn start_of_week(day: NaiveDate) -> NaiveDate {
    day - Duration::days(i64::from(day.weekday().num_days_from_monday()))
}

/// The seven consecutive days starting at `start`.
pub fn week_days(start: NaiveDate) -> [NaiveDate; 7] {
    std::array::from_fn(|i| start + Duration::days(i as i64))
}
