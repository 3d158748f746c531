//! PressBlink firmware library.
//!
//! Exposes the pure-logic modules for integration testing. Hardware access
//! goes through `embedded-hal` traits, so every task body runs on the host
//! against mock pins. ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod config;
pub mod drivers;
pub mod error;
pub mod mode;
pub mod pins;

pub use config::SystemConfig;
pub use error::{Error, Result};
pub use mode::{Mode, SharedMode};
