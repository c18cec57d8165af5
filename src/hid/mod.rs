//! HID keyboard layer: report format, character mapping and the typing
//! state machine.

pub mod emitter;
pub mod keyboard;
pub mod keymap;


pub use emitter::{send_command, Action, KeyboardHost, SendOutcome, Timing, TypingSession};
pub use keyboard::KeyboardReport;
pub use keymap::{keystroke_for, Keystroke};
