//! PressBlink Firmware — Main Entry Point
//!
//! ```text
//! ┌───────────────┐                ┌──────────────┐                ┌───────────────┐
//! │ button task   │   publish()    │  SharedMode  │   current()    │  led task     │
//! │ ButtonSampler │───────────────▶│  (AtomicU8)  │───────────────▶│  StatusLed    │
//! │ every 100 ms  │                └──────────────┘                │ 100/400 ms    │
//! └───────┬───────┘                                                └───────┬───────┘
//!         │ PinDriver<Input>                              PinDriver<Output>│
//!         ▼                                                                ▼
//!     BUTTON_GPIO                                                      LED_GPIO
//! ```
//!
//! Both tasks run at the same priority and never return.
#![deny(unused_must_use)]

use std::sync::Arc;

use anyhow::{Result, anyhow};
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::{AnyIOPin, PinDriver, Pull};
use log::{error, info};

use pressblink::config::{ActiveLevel, SystemConfig};
use pressblink::drivers::button::ButtonSampler;
use pressblink::drivers::status_led::StatusLed;
use pressblink::drivers::task_pin::{TaskSpec, spawn_task};
use pressblink::error::Error;
use pressblink::mode::SharedMode;
use pressblink::pins;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  PressBlink v{}                      ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration ──────────────────────────────────────
    let config = SystemConfig::default();
    config.validate()?;
    let dump = serde_json::to_string(&config).map_err(|e| anyhow!("config dump: {}", e))?;
    info!("Config: {}", dump);

    // ── 3. GPIO ───────────────────────────────────────────────
    // SAFETY: each GPIO number is claimed exactly once, here, and no other
    // driver in this firmware touches the pin table.
    let mut button = PinDriver::input(unsafe { AnyIOPin::new(pins::BUTTON_GPIO) })
        .map_err(|e| gpio_error("button input", &e))?;
    let pull = match config.button_active {
        ActiveLevel::High => Pull::Down,
        ActiveLevel::Low => Pull::Up,
    };
    button
        .set_pull(pull)
        .map_err(|e| gpio_error("button pull", &e))?;

    let led = PinDriver::output(unsafe { AnyIOPin::new(pins::LED_GPIO) })
        .map_err(|e| gpio_error("led output", &e))?;
    info!(
        "GPIO: button={} ({:?}), led={}",
        pins::BUTTON_GPIO,
        config.button_active,
        pins::LED_GPIO
    );

    // ── 4. Shared mode + tasks ────────────────────────────────
    let shared = Arc::new(SharedMode::new());

    let sampler = ButtonSampler::new(button, Arc::clone(&shared), &config);
    let status_led = StatusLed::new(led, Arc::clone(&shared), &config);

    let button_task = spawn_task(&TaskSpec::button(&config), move || sampler.run(FreeRtos))
        .inspect_err(|e| error!("Startup aborted: {}", e))?;
    let led_task = spawn_task(&TaskSpec::led(&config), move || status_led.run(FreeRtos))
        .inspect_err(|e| error!("Startup aborted: {}", e))?;

    info!("System ready. Tasks running.");

    // Neither task returns; a join only completes if one of them panicked.
    button_task
        .join()
        .map_err(|_| anyhow!("button task panicked"))?;
    led_task.join().map_err(|_| anyhow!("led task panicked"))?;
    Ok(())
}

fn gpio_error(what: &'static str, e: &esp_idf_hal::sys::EspError) -> Error {
    error!("GPIO {} config failed: {}", what, e);
    Error::Gpio(what)
}
