//! Blink mode and the cell that carries it from the sampler to the LED task.
//!
//! ```text
//! ┌──────────────┐  publish()   ┌──────────────┐  current()   ┌──────────────┐
//! │ Sampler task │─────────────▶│  SharedMode  │─────────────▶│  LED task    │
//! │ (sole writer)│              │  (AtomicU8)  │              │ (sole reader)│
//! └──────────────┘              └──────────────┘              └──────────────┘
//! ```
//!
//! The cell is a single byte, so loads and stores are never torn. `Release`
//! on store and `Acquire` on load give the LED task the latest committed
//! mode on its next pass.

use core::sync::atomic::{AtomicU8, Ordering};

use crate::config::SystemConfig;

/// What the LED is doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Mode {
    /// Steady low.
    #[default]
    Off = 0,
    /// Short half period (100 ms by default).
    BlinkFast = 1,
    /// Long half period (400 ms by default).
    BlinkSlow = 2,
}

impl Mode {
    const fn from_u8(raw: u8) -> Self {
        match raw {
            1 => Self::BlinkFast,
            2 => Self::BlinkSlow,
            _ => Self::Off,
        }
    }
}

/// One pass of the LED task for a given mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlinkPattern {
    /// Drive low, then wait `poll_ms` before looking at the mode again.
    Dark { poll_ms: u32 },
    /// Drive high for `half_period_ms`, then low for `half_period_ms`.
    Square { half_period_ms: u32 },
}

impl BlinkPattern {
    /// Closed mode → behaviour mapping used by the LED task.
    pub fn for_mode(mode: Mode, config: &SystemConfig) -> Self {
        match mode {
            Mode::Off => Self::Dark {
                poll_ms: config.off_poll_ms,
            },
            Mode::BlinkFast => Self::Square {
                half_period_ms: config.fast_half_period_ms,
            },
            Mode::BlinkSlow => Self::Square {
                half_period_ms: config.slow_half_period_ms,
            },
        }
    }

    /// Time one pass takes before the mode is read again.
    pub const fn cycle_ms(self) -> u32 {
        match self {
            Self::Dark { poll_ms } => poll_ms,
            Self::Square { half_period_ms } => half_period_ms.saturating_mul(2),
        }
    }
}

/// Shared mode context, created once at boot and handed to both tasks.
#[derive(Debug)]
pub struct SharedMode {
    raw: AtomicU8,
}

impl Default for SharedMode {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedMode {
    /// Starts at [`Mode::Off`].
    pub const fn new() -> Self {
        Self {
            raw: AtomicU8::new(Mode::Off as u8),
        }
    }

    /// Latest committed mode.
    pub fn current(&self) -> Mode {
        Mode::from_u8(self.raw.load(Ordering::Acquire))
    }

    /// Commit a new mode. Only the sampler calls this.
    pub fn publish(&self, mode: Mode) {
        self.raw.store(mode as u8, Ordering::Release);
    }
}
