// Geometry module
// Grid measurements and computed event rectangles

use serde::{Deserialize, Serialize};

/// On-screen rectangle computed for a positioned event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EventFrame {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl EventFrame {
    pub fn min_y(&self) -> f32 {
        self.y
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }
}

/// Measurements of the day grid, supplied by the presentation layer.
///
/// All layout and drop-resolution math derives from these four values;
/// the core never touches UI types directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometryConfig {
    /// Pixel height of one hour row.
    pub hour_height: f32,
    /// Vertical gap drawn between hour rows.
    pub hour_spacing: f32,
    /// First visible hour of the day (0-23); the top edge of the grid.
    pub start_hour_of_day: u32,
    /// Snapping interval for resolved drop times, in minutes.
    pub drag_granularity_minutes: u32,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            hour_height: 48.0,
            hour_spacing: 2.0,
            start_hour_of_day: 0,
            drag_granularity_minutes: 15,
        }
    }
}

impl GeometryConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.hour_height <= 0.0 {
            return Err("hour_height must be positive".to_string());
        }
        if self.hour_spacing < 0.0 {
            return Err("hour_spacing cannot be negative".to_string());
        }
        if self.start_hour_of_day > 23 {
            return Err("start_hour_of_day must be between 0 and 23".to_string());
        }
        if self.drag_granularity_minutes == 0 {
            return Err("drag_granularity_minutes must be positive".to_string());
        }
        Ok(())
    }

    /// Vertical scale used when placing events: pixels per second of
    /// event time.
    pub fn pixels_per_second(&self) -> f64 {
        f64::from(self.hour_height) / 3600.0
    }

    /// Inverse scale used when resolving a drop: seconds of event time
    /// per pixel of pointer travel. The spacing between hour rows is part
    /// of the travel distance, so it is included here.
    pub fn seconds_per_pixel(&self) -> f64 {
        3600.0 / f64::from(self.hour_height + self.hour_spacing)
    }
}
