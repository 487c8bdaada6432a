//! Drag/drop time resolution.
//!
//! Converts a pointer position released over the day grid into a snapped,
//! validated target start time. Each call is an independent pure
//! computation; a rejected drop simply means the caller leaves the event at
//! its original time.

use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone, Timelike};
use thiserror::Error;

use crate::models::geometry::GeometryConfig;
use crate::utils::date::{is_midnight, is_same_day, window_start};

/// Why a drop could not be accepted. All variants are recoverable; none
/// aborts anything beyond the single drop being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DropRejection {
    #[error("could not construct the day window for the configured start hour")]
    WindowConstructionFailed,
    #[error("drop time falls before the visible day start at {start_hour}:00")]
    BeforeStartHour { start_hour: u32 },
    #[error("event would end past midnight")]
    SpillsPastMidnight,
}

/// Wall-clock time corresponding to a pixel offset from the top of the
/// grid.
///
/// Pointer travel covers both the hour rows and the spacing between them,
/// so the conversion uses `hour_height + hour_spacing` per hour. Returns
/// `None` when the window start cannot be constructed.
pub fn time_from_pixel_y(
    y: f32,
    config: &GeometryConfig,
    selected_date: NaiveDate,
) -> Option<DateTime<Local>> {
    let start = window_start(selected_date, config.start_hour_of_day)?;
    let seconds = (f64::from(y) * config.seconds_per_pixel()) as i64;
    Some(start + Duration::seconds(seconds))
}

/// Round `time` to the nearest multiple of `granularity_minutes`, ties up,
/// seconds zeroed.
///
/// Falls back to the unmodified input when the local calendar cannot
/// rebuild a date from the snapped components (snapping past 24:00, DST
/// gaps); snapping is best-effort and never fails the drop on its own.
pub fn snap_to_interval(time: DateTime<Local>, granularity_minutes: u32) -> DateTime<Local> {
    if granularity_minutes == 0 {
        return time;
    }

    let total_minutes = time.hour() * 60 + time.minute();
    let snapped = (total_minutes + granularity_minutes / 2) / granularity_minutes
        * granularity_minutes;

    time.date_naive()
        .and_hms_opt(snapped / 60, snapped % 60, 0)
        .and_then(|naive| Local.from_local_datetime(&naive).single())
        .unwrap_or(time)
}

/// Check that an event starting at `time` fits the visible day.
///
/// The event must not start before the configured first hour and must end
/// on the same calendar day, with one exception: an end landing exactly on
/// midnight sits on the day boundary and is allowed.
pub fn is_valid_drop_time(
    time: DateTime<Local>,
    start_hour_of_day: u32,
    event_duration: Duration,
) -> Result<(), DropRejection> {
    if time.hour() < start_hour_of_day {
        return Err(DropRejection::BeforeStartHour {
            start_hour: start_hour_of_day,
        });
    }

    let end = time + event_duration;
    if is_same_day(time, end) || is_midnight(end) {
        Ok(())
    } else {
        Err(DropRejection::SpillsPastMidnight)
    }
}

/// Resolve a completed drop: pixel offset to wall-clock time, snapped to
/// the drag granularity, then validated against the day bounds.
pub fn resolve_drop(
    pixel_y: f32,
    config: &GeometryConfig,
    selected_date: NaiveDate,
    event_duration: Duration,
) -> Result<DateTime<Local>, DropRejection> {
    let raw = time_from_pixel_y(pixel_y, config, selected_date)
        .ok_or(DropRejection::WindowConstructionFailed)?;
    let snapped = snap_to_interval(raw, config.drag_granularity_minutes);
    is_valid_drop_time(snapped, config.start_hour_of_day, event_duration)?;
    Ok(snapped)
}
