// Event module
// Timed event model consumed by the layout and drag services

use chrono::{DateTime, Duration, Local};

/// Capability interface for anything the layout engine can position.
///
/// The engine only needs a stable identity, a start time and a duration;
/// any concrete event type (database rows, sync snapshots, test fixtures)
/// can implement this and be laid out without conversion.
pub trait TimedEvent {
    /// Opaque unique identifier.
    fn id(&self) -> &str;

    /// Absolute start time of the event.
    fn start(&self) -> DateTime<Local>;

    /// Total duration. Never negative.
    fn duration(&self) -> Duration;

    /// Derived end time (`start + duration`).
    fn end(&self) -> DateTime<Local> {
        self.start() + self.duration()
    }
}

/// A plain calendar event.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub start: DateTime<Local>,
    pub duration: Duration,
}

impl Event {
    /// Create a new event with required fields.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (required, non-empty)
    /// * `title` - Event title
    /// * `start` - Event start time
    /// * `duration` - Event duration (must not be negative)
    ///
    /// # Returns
    /// Returns `Result<Event, String>` with validation
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start: DateTime<Local>,
        duration: Duration,
    ) -> Result<Self, String> {
        let id = id.into();

        if id.trim().is_empty() {
            return Err("Event id cannot be empty".to_string());
        }

        if duration < Duration::zero() {
            return Err("Event duration cannot be negative".to_string());
        }

        Ok(Self {
            id,
            title: title.into(),
            start,
            duration,
        })
    }

    /// Derived end time of the event.
    pub fn end(&self) -> DateTime<Local> {
        self.start + self.duration
    }
}

impl TimedEvent for Event {
    fn id(&self) -> &str {
        &self.id
    }

    fn start(&self) -> DateTime<Local> {
        self.start
    }

    fn duration(&self) -> Duration {
        self.duration
    }
}
