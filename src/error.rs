//! Unified error types for the PressBlink firmware.
//!
//! The classifier and blink loop never fail in-band; everything here is a
//! startup-time failure that `main()` turns into an abort. All variants are
//! `Copy` so they can be passed around without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Configuration is invalid. The message names the offending field.
    Config(&'static str),
    /// A GPIO could not be configured as input or output.
    Gpio(&'static str),
    /// The scheduler could not create a task (out of stack / task slots).
    TaskSpawn(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Gpio(msg) => write!(f, "gpio: {msg}"),
            Self::TaskSpawn(name) => write!(f, "task spawn failed: {name}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
