//! GPIO pin assignments for the PressBlink board.
//!
//! Single source of truth: `main()` hands these pins to the HAL and nothing
//! else hard-codes a GPIO number.

// ---------------------------------------------------------------------------
// Status LED
// ---------------------------------------------------------------------------

/// Digital output driving the blink LED (active HIGH).
pub const LED_GPIO: i32 = 2;

// ---------------------------------------------------------------------------
// User button
// ---------------------------------------------------------------------------

/// Digital input for the momentary push button.
/// Wired to 3V3 with a pull-down, so HIGH = pressed by default.
pub const BUTTON_GPIO: i32 = 4;
