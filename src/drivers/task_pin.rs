//! Core-pinned task spawning.
//!
//! Wraps `esp_pthread_set_cfg()` so that `std::thread::spawn` creates a
//! FreeRTOS task with explicit priority, stack size and core. On non-ESP
//! targets, falls back to plain thread spawn.
//!
//! # ESP-IDF Threading Model
//!
//! ESP-IDF implements `std::thread` via pthreads, which are thin wrappers
//! around FreeRTOS tasks. `esp_pthread_set_cfg()` sets thread-local
//! configuration that applies to the *next* `pthread_create()` call from
//! the calling thread, so the config→spawn pair must not be interleaved
//! with other thread creation on the same thread.

use std::thread::JoinHandle;

use crate::config::SystemConfig;
use crate::error::{Error, Result};

/// CPU core identifiers for the ESP32 dual-core. Core 0 (PRO_CPU) is left
/// to the IDF protocol stacks, so only the application core is named.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum Core {
    /// Core 1 (APP_CPU): application logic.
    App = 1,
}

/// Everything the scheduler needs to create one task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskSpec {
    /// Null-terminated task name (e.g. `"button\0"`).
    pub name: &'static str,
    pub priority: u8,
    pub stack_kb: usize,
    pub core: Core,
}

impl TaskSpec {
    /// Button sampler task. Same priority and core as [`TaskSpec::led`].
    pub fn button(config: &SystemConfig) -> Self {
        Self {
            name: "button\0",
            priority: config.task_priority,
            stack_kb: config.task_stack_kb,
            core: Core::App,
        }
    }

    /// LED blink task.
    pub fn led(config: &SystemConfig) -> Self {
        Self {
            name: "led\0",
            priority: config.task_priority,
            stack_kb: config.task_stack_kb,
            core: Core::App,
        }
    }

    /// Name without the trailing NUL.
    pub fn display_name(&self) -> &'static str {
        self.name.trim_end_matches('\0')
    }
}

/// Spawn a task pinned to a specific core with explicit priority and stack.
///
/// On ESP-IDF, uses `esp_pthread_set_cfg()` to configure core affinity,
/// priority, and stack size before `std::thread::spawn`.
#[cfg(target_os = "espidf")]
pub fn spawn_task(
    spec: &TaskSpec,
    f: impl FnOnce() + Send + 'static,
) -> Result<JoinHandle<()>> {
    // SAFETY: the config struct is fully initialised by the IDF helper and
    // `name` is a 'static NUL-terminated string that outlives the task.
    let ret = unsafe {
        let mut cfg = esp_idf_sys::esp_create_default_pthread_config();
        cfg.pin_to_core = spec.core as i32;
        cfg.prio = i32::from(spec.priority);
        cfg.stack_size = (spec.stack_kb * 1024) as _;
        cfg.thread_name = spec.name.as_ptr().cast();
        esp_idf_sys::esp_pthread_set_cfg(&cfg)
    };
    if ret != esp_idf_sys::ESP_OK as i32 {
        log::error!("esp_pthread_set_cfg failed for '{}': {}", spec.display_name(), ret);
        return Err(Error::TaskSpawn(spec.display_name()));
    }

    log::info!(
        "Spawning '{}' on {:?} (pri={}, stack={}KB)",
        spec.display_name(),
        spec.core,
        spec.priority,
        spec.stack_kb
    );

    std::thread::Builder::new()
        .name(spec.display_name().into())
        .spawn(f)
        .map_err(|_| Error::TaskSpawn(spec.display_name()))
}

/// Simulation fallback: ignores core affinity and priority.
#[cfg(not(target_os = "espidf"))]
pub fn spawn_task(
    spec: &TaskSpec,
    f: impl FnOnce() + Send + 'static,
) -> Result<JoinHandle<()>> {
    log::info!(
        "Spawning '{}' (sim, no core pinning, stack={}KB)",
        spec.display_name(),
        spec.stack_kb
    );

    std::thread::Builder::new()
        .name(spec.display_name().into())
        .stack_size(spec.stack_kb * 1024)
        .spawn(f)
        .map_err(|_| Error::TaskSpawn(spec.display_name()))
}
