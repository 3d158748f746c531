//! Blinking status LED driven by the shared mode.
//!
//! The task reads the mode at the top of every pass and runs one full
//! [`BlinkPattern`] before looking again, so a mode change that lands in the
//! middle of a blink takes effect at the next cycle boundary.

use std::sync::Arc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};
use log::{debug, info, warn};

use crate::config::SystemConfig;
use crate::mode::{BlinkPattern, Mode, SharedMode};

pub struct StatusLed<P> {
    pin: P,
    shared: Arc<SharedMode>,
    config: SystemConfig,
    last_mode: Option<Mode>,
}

impl<P: OutputPin> StatusLed<P> {
    pub fn new(pin: P, shared: Arc<SharedMode>, config: &SystemConfig) -> Self {
        Self {
            pin,
            shared,
            config: config.clone(),
            last_mode: None,
        }
    }

    /// Run one pass for the current mode and return the mode acted on.
    pub fn step<D: DelayNs>(&mut self, delay: &mut D) -> Mode {
        let mode = self.shared.current();
        if self.last_mode != Some(mode) {
            debug!("LED: {:?} -> {:?}", self.last_mode, mode);
            self.last_mode = Some(mode);
        }

        match BlinkPattern::for_mode(mode, &self.config) {
            BlinkPattern::Dark { poll_ms } => {
                self.drive(PinState::Low);
                delay.delay_ms(poll_ms);
            }
            BlinkPattern::Square { half_period_ms } => {
                self.drive(PinState::High);
                delay.delay_ms(half_period_ms);
                self.drive(PinState::Low);
                delay.delay_ms(half_period_ms);
            }
        }
        mode
    }

    /// Mode acted on by the latest pass, `None` before the first one.
    pub fn last_mode(&self) -> Option<Mode> {
        self.last_mode
    }

    fn drive(&mut self, state: PinState) {
        if let Err(e) = self.pin.set_state(state) {
            warn!("LED: write {:?} failed ({:?})", state, e);
        }
    }

    /// Blink forever.
    pub fn run<D: DelayNs>(mut self, mut delay: D) -> ! {
        info!(
            "LED: fast cycle {}ms, slow cycle {}ms, off re-check {}ms",
            BlinkPattern::for_mode(Mode::BlinkFast, &self.config).cycle_ms(),
            BlinkPattern::for_mode(Mode::BlinkSlow, &self.config).cycle_ms(),
            BlinkPattern::for_mode(Mode::Off, &self.config).cycle_ms()
        );
        loop {
            self.step(&mut delay);
        }
    }
}
