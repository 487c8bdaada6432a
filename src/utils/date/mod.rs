// Date utility functions

use chrono::{DateTime, Local, NaiveDate, TimeZone, Timelike};

pub fn is_same_day(date1: DateTime<Local>, date2: DateTime<Local>) -> bool {
    date1.date_naive() == date2.date_naive()
}

/// Timestamp of `hour:00:00` on `date` in the local timezone; the top edge
/// of the visible day grid.
///
/// Returns `None` when the boundary cannot be constructed: `hour` out of
/// range, or the local time does not exist (DST gap) or is ambiguous.
pub fn window_start(date: NaiveDate, hour: u32) -> Option<DateTime<Local>> {
    let naive = date.and_hms_opt(hour, 0, 0)?;
    Local.from_local_datetime(&naive).single()
}

pub fn is_midnight(time: DateTime<Local>) -> bool {
    time.hour() == 0 && time.minute() == 0 && time.second() == 0
}
