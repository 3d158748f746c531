//! Polled button sampler with press-duration classification.
//!
//! ## Hardware
//!
//! Momentary switch on a plain GPIO input. No edge interrupt: the task
//! samples the pin once per scan period, so contact bounce shorter than one
//! period never shows up as an edge.
//!
//! ## Classification
//!
//! Consecutive asserted samples are counted. On the release edge the count
//! times the scan period gives the hold time, which picks the new mode:
//!
//! | Hold time          | Mode        |
//! |--------------------|-------------|
//! | < 2 s              | `Off`       |
//! | 2 s ..< 4 s        | `BlinkFast` |
//! | >= 4 s             | `BlinkSlow` |
//!
//! The mode is published once per release and never while the level is
//! steady.

use std::sync::Arc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;
use log::{debug, info, warn};

use crate::config::{ActiveLevel, SystemConfig, Thresholds};
use crate::mode::{Mode, SharedMode};

/// Outcome of a processed release edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PressRelease {
    pub press_ticks: u16,
    pub held_ms: u32,
    pub mode: Mode,
}

/// Per-sampler edge detector state. Lives as long as the sampler task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SampleState {
    current: bool,
    previous: bool,
    press_ticks: u16,
}

impl SampleState {
    pub const fn new() -> Self {
        Self {
            current: false,
            previous: false,
            press_ticks: 0,
        }
    }

    /// Feed one sample. Returns the classified press on a release edge.
    ///
    /// `press_ticks` saturates at `u16::MAX`; a press that long is still
    /// far past the slow threshold.
    pub fn observe(
        &mut self,
        asserted: bool,
        scan_period_ms: u32,
        thresholds: &Thresholds,
    ) -> Option<PressRelease> {
        self.current = asserted;

        let release = if asserted {
            self.press_ticks = self.press_ticks.saturating_add(1);
            None
        } else if self.previous {
            let press_ticks = self.press_ticks;
            let held_ms = u32::from(press_ticks).saturating_mul(scan_period_ms);
            self.press_ticks = 0;
            Some(PressRelease {
                press_ticks,
                held_ms,
                mode: thresholds.classify(held_ms),
            })
        } else {
            None
        };

        self.previous = self.current;
        release
    }

    /// Level seen on the latest sample.
    pub fn current_level(&self) -> bool {
        self.current
    }

    /// Level seen on the sample before the latest one was processed.
    pub fn previous_level(&self) -> bool {
        self.previous
    }

    /// Consecutive asserted samples in the press being measured.
    pub fn press_ticks(&self) -> u16 {
        self.press_ticks
    }
}

/// Sampler task body: owns the button pin, writes the shared mode.
pub struct ButtonSampler<P> {
    pin: P,
    shared: Arc<SharedMode>,
    state: SampleState,
    active: ActiveLevel,
    scan_period_ms: u32,
    thresholds: Thresholds,
}

impl<P: InputPin> ButtonSampler<P> {
    pub fn new(pin: P, shared: Arc<SharedMode>, config: &SystemConfig) -> Self {
        Self {
            pin,
            shared,
            state: SampleState::new(),
            active: config.button_active,
            scan_period_ms: config.scan_period_ms,
            thresholds: config.thresholds(),
        }
    }

    /// Take one sample and publish the mode if it completed a press.
    ///
    /// A failed read skips the sample entirely: the counter and the edge
    /// detector keep their previous values.
    pub fn sample(&mut self) -> Option<PressRelease> {
        let pin_high = match self.pin.is_high() {
            Ok(level) => level,
            Err(e) => {
                warn!("Button: read failed ({:?}), sample skipped", e);
                return None;
            }
        };

        let asserted = self.active.is_asserted(pin_high);
        let release = self
            .state
            .observe(asserted, self.scan_period_ms, &self.thresholds)?;

        debug!(
            "Button: release after {} ticks ({}ms)",
            release.press_ticks, release.held_ms
        );
        self.shared.publish(release.mode);
        info!("Button: held {}ms → {:?}", release.held_ms, release.mode);
        Some(release)
    }

    pub fn state(&self) -> &SampleState {
        &self.state
    }

    pub fn scan_period_ms(&self) -> u32 {
        self.scan_period_ms
    }

    /// Sample forever, suspending one scan period between samples.
    pub fn run<D: DelayNs>(mut self, mut delay: D) -> ! {
        info!(
            "Button: sampling every {}ms (fast >= {}ms, slow >= {}ms)",
            self.scan_period_ms, self.thresholds.fast_ms, self.thresholds.slow_ms
        );
        loop {
            self.sample();
            delay.delay_ms(self.scan_period_ms);
        }
    }
}
