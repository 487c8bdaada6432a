//! Day-view layout engine.
//!
//! Turns the day's events into vertical frames plus column assignments so
//! overlapping events tile side-by-side without visual collision. One pass
//! over the input in the order it was received; that order is the tie-break
//! for column assignment, so identical input always yields identical
//! placement.

use chrono::NaiveDate;

use crate::models::event::TimedEvent;
use crate::models::geometry::{EventFrame, GeometryConfig};
use crate::utils::date::window_start;

/// Reference width assigned to every frame before column subdivision.
/// The presentation layer maps this onto its real drawing width via
/// [`PositionedEvent::frame_in_width`].
pub const EVENT_AREA_WIDTH: f32 = 200.0;

/// An input event together with its computed placement.
///
/// Layout output is copy-in/copy-out: the engine clones the event and fills
/// in the placement fields from scratch on every pass, so no stale geometry
/// can survive a recompute.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedEvent<E> {
    pub event: E,
    /// Vertical extent within the grid; `x` and `width` are the reference
    /// values before column subdivision.
    pub frame: EventFrame,
    /// Horizontal slot among the overlapping siblings seen so far.
    pub column: usize,
    /// Number of columns this event shares its rows with, itself included.
    pub column_count: usize,
    /// Seconds of the event actually drawn; less than the full duration
    /// when the event starts before the visible window.
    pub visible_seconds: i64,
}

impl<E> PositionedEvent<E> {
    /// Frame for drawing into a concrete width: the event area is split
    /// into `column_count` equal columns and the frame shifted into its
    /// assigned column.
    pub fn frame_in_width(&self, total_width: f32) -> EventFrame {
        let columns = self.column_count.max(1) as f32;
        let column_width = total_width / columns;
        EventFrame {
            x: column_width * self.column as f32,
            y: self.frame.y,
            width: column_width,
            height: self.frame.height,
        }
    }
}

/// Lay out one day's events.
///
/// Events ending at or before the window start are filtered out; events
/// starting before it are clipped to the top edge. The caller's slice is
/// never touched. If the window boundary for `selected_date` cannot be
/// constructed, no placement is possible and the output is empty.
pub fn layout_day<E: TimedEvent + Clone>(
    events: &[E],
    selected_date: NaiveDate,
    config: &GeometryConfig,
) -> Vec<PositionedEvent<E>> {
    let Some(window_start) = window_start(selected_date, config.start_hour_of_day) else {
        log::warn!(
            "Cannot construct window start for {} at hour {}; skipping layout",
            selected_date,
            config.start_hour_of_day
        );
        return Vec::new();
    };

    let pixels_per_second = config.pixels_per_second();
    let mut positioned: Vec<PositionedEvent<E>> = Vec::with_capacity(events.len());

    for event in events {
        let end = event.end();
        if end <= window_start {
            log::debug!("Event {} ends before the visible window, skipping", event.id());
            continue;
        }

        let start = event.start();
        let visible_seconds = if start < window_start {
            (end - window_start).num_seconds()
        } else {
            event.duration().num_seconds()
        };

        let y = ((start - window_start).num_seconds().max(0) as f64 * pixels_per_second) as f32;
        let height = (visible_seconds as f64 * pixels_per_second) as f32;

        let overlapping: Vec<usize> = positioned
            .iter()
            .enumerate()
            .filter(|(_, placed)| overlaps(&placed.frame, y, height))
            .map(|(index, _)| index)
            .collect();

        // Overlap is symmetric: every earlier sibling gains a column too.
        for &index in &overlapping {
            positioned[index].column_count += 1;
        }

        positioned.push(PositionedEvent {
            event: event.clone(),
            frame: EventFrame {
                x: 0.0,
                y,
                width: EVENT_AREA_WIDTH,
                height,
            },
            column: overlapping.len(),
            column_count: overlapping.len() + 1,
            visible_seconds,
        });
    }

    positioned
}

/// Half-open vertical overlap test: the other frame's top edge falls inside
/// `[y, y + height)`, or its bottom edge inside `(y, y + height]`.
fn overlaps(other: &EventFrame, y: f32, height: f32) -> bool {
    let top_inside = other.min_y() >= y && other.min_y() < y + height;
    let bottom_inside = other.max_y() > y && other.max_y() <= y + height;
    top_inside || bottom_inside
}
