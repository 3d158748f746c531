//! Integration tests: button → shared mode → LED, both tasks together.

use std::sync::Arc;
use std::time::{Duration, Instant};

use pressblink::config::SystemConfig;
use pressblink::drivers::button::ButtonSampler;
use pressblink::drivers::status_led::StatusLed;
use pressblink::drivers::task_pin::{TaskSpec, spawn_task};
use pressblink::mode::{Mode, SharedMode};

use crate::mock_hw::{RecordingLed, Sample, ScriptedButton, SimClock, SimDelay, StdDelay};

/// Interleave both task bodies on one virtual timeline. The sampler runs
/// whenever its next sample is due at or before the LED's current time.
fn simulate(button: ScriptedButton, until_ms: u64) -> (RecordingLed, Arc<SharedMode>) {
    let config = SystemConfig::default();
    let clock = SimClock::new();
    let pin = RecordingLed::new(&clock);
    let shared = Arc::new(SharedMode::new());

    let mut sampler = ButtonSampler::new(button, Arc::clone(&shared), &config);
    let mut led = StatusLed::new(pin.clone(), Arc::clone(&shared), &config);
    let mut delay = SimDelay::new(&clock);
    let mut next_sample_ms = 0u64;

    while clock.now_ms() < until_ms {
        if next_sample_ms <= clock.now_ms() {
            sampler.sample();
            next_sample_ms += u64::from(sampler.scan_period_ms());
        } else {
            led.step(&mut delay);
        }
    }
    (pin, shared)
}

#[test]
fn press_selects_blink_rate_end_to_end() {
    let mut button = ScriptedButton::new();
    button
        .push(Sample::High, 25)
        .push(Sample::Low, 10)
        .push(Sample::High, 45)
        .push(Sample::Low, 1);

    let (pin, shared) = simulate(button, 10_000);
    let rising = pin.rising_ms();

    // Fast blink starts on the LED pass right after the release at 2.5 s.
    assert_eq!(rising.first(), Some(&2500));
    assert!(rising.contains(&7900));
    // The 8.0 s release lands mid-cycle; slow blink starts at 8.1 s.
    assert!(!rising.contains(&8000));
    assert!(rising.contains(&8100));
    assert!(rising.contains(&8900));
    assert!(!rising.contains(&8300));
    assert_eq!(shared.current(), Mode::BlinkSlow);
}

#[test]
fn short_press_turns_blinking_off() {
    let mut button = ScriptedButton::new();
    button
        .push(Sample::High, 20)
        .push(Sample::Low, 10)
        .push(Sample::High, 5)
        .push(Sample::Low, 1);

    let (pin, shared) = simulate(button, 6000);
    let rising = pin.rising_ms();
    assert_eq!(rising.first(), Some(&2000));
    // Released at 3.5 s; the cycle started at 3.4 s finishes, then dark.
    assert_eq!(rising.last(), Some(&3400));
    assert_eq!(shared.current(), Mode::Off);
    assert!(!pin.edges().last().unwrap().high);
}

#[test]
fn tasks_run_concurrently_on_threads() {
    let config = SystemConfig {
        scan_period_ms: 1,
        fast_threshold_ms: 20,
        slow_threshold_ms: 40,
        fast_half_period_ms: 1,
        slow_half_period_ms: 2,
        off_poll_ms: 1,
        ..SystemConfig::default()
    };
    let shared = Arc::new(SharedMode::new());
    let clock = SimClock::new();
    let pin = RecordingLed::new(&clock);

    let sampler = ButtonSampler::new(ScriptedButton::press(25), Arc::clone(&shared), &config);
    let led = StatusLed::new(pin.clone(), Arc::clone(&shared), &config);

    // Both bodies loop forever; the threads are left running.
    spawn_task(&TaskSpec::button(&config), move || sampler.run(StdDelay)).unwrap();
    spawn_task(&TaskSpec::led(&config), move || led.run(StdDelay)).unwrap();

    let deadline = Instant::now() + Duration::from_secs(5);
    while pin.rising_ms().is_empty() && Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(5));
    }
    assert_eq!(shared.current(), Mode::BlinkFast);
    assert!(!pin.rising_ms().is_empty(), "LED never lit after a fast press");
}
