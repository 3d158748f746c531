//! Integration tests: SharedMode → StatusLed waveform on a virtual clock.

use std::sync::Arc;

use pressblink::config::SystemConfig;
use pressblink::drivers::status_led::StatusLed;
use pressblink::mode::{Mode, SharedMode};

use crate::mock_hw::{Edge, RecordingLed, SimClock, SimDelay};

struct Rig {
    clock: SimClock,
    delay: SimDelay,
    pin: RecordingLed,
    shared: Arc<SharedMode>,
    led: StatusLed<RecordingLed>,
}

fn rig(pin_factory: fn(&SimClock) -> RecordingLed) -> Rig {
    let clock = SimClock::new();
    let pin = pin_factory(&clock);
    let shared = Arc::new(SharedMode::new());
    let led = StatusLed::new(pin.clone(), Arc::clone(&shared), &SystemConfig::default());
    Rig {
        delay: SimDelay::new(&clock),
        clock,
        pin,
        shared,
        led,
    }
}

#[test]
fn fast_blink_square_wave() {
    let mut r = rig(RecordingLed::new);
    r.shared.publish(Mode::BlinkFast);
    for _ in 0..5 {
        assert_eq!(r.led.step(&mut r.delay), Mode::BlinkFast);
    }

    let edges = r.pin.edges();
    assert_eq!(edges.len(), 10);
    for (i, edge) in edges.iter().enumerate() {
        assert_eq!(
            *edge,
            Edge {
                at_ms: i as u64 * 100,
                high: i % 2 == 0,
            }
        );
    }
    assert_eq!(r.clock.now_ms(), 1000);
}

#[test]
fn slow_blink_square_wave() {
    let mut r = rig(RecordingLed::new);
    r.shared.publish(Mode::BlinkSlow);
    r.led.step(&mut r.delay);
    r.led.step(&mut r.delay);
    assert_eq!(r.pin.rising_ms(), vec![0, 800]);
    assert_eq!(r.clock.now_ms(), 1600);
}

#[test]
fn off_holds_low_and_keeps_polling() {
    let mut r = rig(RecordingLed::new);
    for _ in 0..20 {
        r.led.step(&mut r.delay);
    }
    assert!(r.pin.edges().iter().all(|e| !e.high));
    assert_eq!(r.pin.edges().len(), 20);
    assert_eq!(r.clock.now_ms(), 200);
}

#[test]
fn mode_change_mid_cycle_waits_for_boundary() {
    let mut r = rig(RecordingLed::new);
    r.shared.publish(Mode::BlinkSlow);

    // The cycle reads the mode once at t=0; a change that lands while the
    // LED is lit does not shorten this cycle.
    let mode = r.led.step(&mut r.delay);
    r.shared.publish(Mode::BlinkFast);
    assert_eq!(mode, Mode::BlinkSlow);
    assert_eq!(r.clock.now_ms(), 800);

    assert_eq!(r.led.step(&mut r.delay), Mode::BlinkFast);
    assert_eq!(r.pin.rising_ms(), vec![0, 800]);
    assert_eq!(r.clock.now_ms(), 1000);
}

#[test]
fn switching_off_ends_with_pin_low() {
    let mut r = rig(RecordingLed::new);
    r.shared.publish(Mode::BlinkFast);
    r.led.step(&mut r.delay);
    r.shared.publish(Mode::Off);
    r.led.step(&mut r.delay);
    let last = *r.pin.edges().last().unwrap();
    assert!(!last.high);
    assert_eq!(r.led.last_mode(), Some(Mode::Off));
}

#[test]
fn write_failures_do_not_stop_the_cycle() {
    let mut r = rig(RecordingLed::failing);
    r.shared.publish(Mode::BlinkFast);
    for _ in 0..3 {
        r.led.step(&mut r.delay);
    }
    assert!(r.pin.edges().is_empty());
    assert_eq!(r.clock.now_ms(), 600);
}
