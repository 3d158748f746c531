//! System configuration parameters
//!
//! All tunable timing for the press classifier and the blink loop. The
//! thresholds are milliseconds, compared against `press_ticks * scan_period_ms`,
//! so changing the scan period never moves the band edges.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::mode::Mode;

/// Default interval between two button samples.
pub const SCAN_PERIOD_MS: u32 = 100;
/// Shortest hold that selects the fast blink.
pub const FAST_THRESHOLD_MS: u32 = 2000;
/// Shortest hold that selects the slow blink.
pub const SLOW_THRESHOLD_MS: u32 = 4000;

/// Logical level a pin reads when the button is pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActiveLevel {
    High,
    Low,
}

impl ActiveLevel {
    /// Map a raw `is_high` reading to "asserted".
    pub const fn is_asserted(self, pin_high: bool) -> bool {
        match self {
            Self::High => pin_high,
            Self::Low => !pin_high,
        }
    }
}

/// Press-duration band edges, half-open: `[fast, slow)` and `[slow, ∞)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub fast_ms: u32,
    pub slow_ms: u32,
}

impl Thresholds {
    /// Classify a completed press.
    pub const fn classify(&self, held_ms: u32) -> Mode {
        if held_ms >= self.slow_ms {
            Mode::BlinkSlow
        } else if held_ms >= self.fast_ms {
            Mode::BlinkFast
        } else {
            Mode::Off
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            fast_ms: FAST_THRESHOLD_MS,
            slow_ms: SLOW_THRESHOLD_MS,
        }
    }
}

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Button sampler ---
    /// Sampling period, also the debounce granularity (milliseconds)
    pub scan_period_ms: u32,
    /// Hold time selecting `BlinkFast` (milliseconds, inclusive)
    pub fast_threshold_ms: u32,
    /// Hold time selecting `BlinkSlow` (milliseconds, inclusive)
    pub slow_threshold_ms: u32,
    /// Pin level that means "pressed"
    pub button_active: ActiveLevel,

    // --- LED actuator ---
    /// Half period of the fast blink (milliseconds)
    pub fast_half_period_ms: u32,
    /// Half period of the slow blink (milliseconds)
    pub slow_half_period_ms: u32,
    /// Re-check interval while the LED is off (milliseconds)
    pub off_poll_ms: u32,

    // --- Tasks ---
    /// FreeRTOS priority shared by both tasks
    pub task_priority: u8,
    /// Stack budget per task (KiB)
    pub task_stack_kb: usize,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Sampler
            scan_period_ms: SCAN_PERIOD_MS,
            fast_threshold_ms: FAST_THRESHOLD_MS,
            slow_threshold_ms: SLOW_THRESHOLD_MS,
            button_active: ActiveLevel::High,

            // Actuator
            fast_half_period_ms: 100, // 5 Hz
            slow_half_period_ms: 400, // 1.25 Hz
            off_poll_ms: 10,

            // Tasks
            task_priority: 5,
            task_stack_kb: 4,
        }
    }
}

impl SystemConfig {
    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            fast_ms: self.fast_threshold_ms,
            slow_ms: self.slow_threshold_ms,
        }
    }

    /// Reject values that would make a task spin or a band unreachable.
    pub fn validate(&self) -> Result<()> {
        if self.scan_period_ms == 0 {
            return Err(Error::Config("scan_period_ms must be > 0"));
        }
        if self.fast_threshold_ms >= self.slow_threshold_ms {
            return Err(Error::Config(
                "fast_threshold_ms must be below slow_threshold_ms",
            ));
        }
        if self.fast_half_period_ms == 0 || self.slow_half_period_ms == 0 {
            return Err(Error::Config("blink half periods must be > 0"));
        }
        if self.off_poll_ms == 0 {
            return Err(Error::Config("off_poll_ms must be > 0"));
        }
        if self.task_stack_kb == 0 {
            return Err(Error::Config("task_stack_kb must be > 0"));
        }
        Ok(())
    }
}
