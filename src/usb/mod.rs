//! USB Device subsystem - presents a boot-protocol keyboard to the host.
//!
//! The nRF52840's built-in USB 2.0 Full-Speed controller is driven by
//! `embassy-usb` with a single HID interface:
//!
//! - Interface 0: Keyboard (boot protocol)
//!
//! The device stays off the bus until a typing session activates it and
//! disappears again when the session restores the port. A session that
//! times out waiting for the host leaves it attached.

pub mod hid_device;

pub use hid_device::{init, run_usb_device, UsbDriver, UsbKeyboard, UsbKeyboardDevice};
