//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and protocol
//! constants live here so they can be tuned in one place.

// HID typing

/// Interval between host-readiness checks after enabling the keyboard (ms).
pub const HID_CONNECT_POLL_MS: u32 = 10;

/// Number of readiness checks before giving up. 500 x 10 ms = 5 s.
pub const HID_CONNECT_ATTEMPTS: u16 = 500;

/// Pause after the host is ready, before the first keystroke (ms).
pub const HID_CONNECT_SETTLE_MS: u32 = 500;

/// How long each key is held down (ms).
pub const KEY_HOLD_MS: u32 = 20;

/// Pause after each key release (ms).
pub const KEY_GAP_MS: u32 = 10;

/// Extra pause after Return so the host can submit the line (ms).
pub const NEWLINE_SETTLE_MS: u32 = 100;

/// Pause on the "SENDING..." screen after typing finishes (ms).
pub const POST_SEND_DELAY_MS: u32 = 1000;

// Application loop

/// Main loop cadence (ms).
pub const TICK_MS: u32 = 50;

/// Ticks before the splash screen advances on its own. 300 x 50 ms = 15 s.
pub const SPLASH_TICKS: u32 = 300;

/// Rows visible at once in a command submenu.
pub const VISIBLE_ROWS: usize = 4;

/// Characters of the command text shown on the confirm screen.
pub const COMMAND_PREVIEW_CHARS: usize = 30;

// USB

/// USB VID/PID - use the "pid.codes" open-source test VID.
/// Replace with your own allocated VID/PID for production.
pub const USB_VID: u16 = 0x1209;
pub const USB_PID: u16 = 0x0002;

/// USB device strings.
pub const USB_MANUFACTURER: &str = "celeste-remote";
pub const USB_PRODUCT: &str = "Celeste CLI Remote";
pub const USB_SERIAL_NUMBER: &str = "000001";

/// USB HID polling interval (ms).
pub const USB_HID_POLL_MS: u8 = 1;

/// Upper bound on a single report write before it is abandoned (ms).
pub const USB_REPORT_TIMEOUT_MS: u64 = 100;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Button UP      → P0.11
//   Button DOWN    → P0.12
//   Button OK      → P0.24
//   Button BACK    → P0.25
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27

/// Button debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 50;
