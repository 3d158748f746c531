//! GPIO-facing task bodies and task spawning helpers.

pub mod button;
pub mod status_led;
pub mod task_pin;
