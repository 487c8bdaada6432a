// Service module exports

pub mod drag;
pub mod layout;
