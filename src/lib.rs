//! celeste-remote: handheld USB keyboard that types `celestecli` commands.
//!
//! Everything above the hardware lives here and builds on the host:
//! the command catalog, the key map and typing state machine, the menu
//! state machine with its renderers, and the application loop.
//!
//! Usage: `cargo test --lib` / `cargo test`
//!
//! The `embedded` feature adds the nRF52840 board glue (`usb`,
//! `ui::display`, `ui::buttons`, `ui::panel`) used by the firmware in
//! `main.rs`.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod hid;
pub mod ui;
#[cfg(feature = "embedded")]
pub mod usb;

pub use app::{run, Frontend, RunSummary};
pub use error::Error;
