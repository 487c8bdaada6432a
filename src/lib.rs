// Timegrid Library
// Day-view event layout and drag-to-reschedule core, exported for reuse

pub mod models;
pub mod services;
pub mod utils;
