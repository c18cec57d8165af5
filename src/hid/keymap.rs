//! ASCII → keyboard usage mapping (US layout).
//!
//! Only the characters that appear in catalog commands are covered.
//! Everything else maps to `None` and is skipped by the emitter.

use super::keyboard::usage;
use crate::config::NEWLINE_SETTLE_MS;

/// How to type one character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Keystroke {
    /// Keyboard page usage ID.
    pub usage: u8,
    /// Hold Left Shift while the key is down.
    pub shift: bool,
    /// Extra pause after the key is released (ms).
    pub settle_ms: u32,
}

impl Keystroke {
    const fn plain(usage: u8) -> Self {
        Self {
            usage,
            shift: false,
            settle_ms: 0,
        }
    }

    const fn shifted(usage: u8) -> Self {
        Self {
            usage,
            shift: true,
            settle_ms: 0,
        }
    }
}

/// Map a character to its keystroke, or `None` if it cannot be typed.
pub fn keystroke_for(c: char) -> Option<Keystroke> {
    match c {
        'a'..='z' => Some(Keystroke::plain(usage::A + (c as u8 - b'a'))),
        'A'..='Z' => Some(Keystroke::shifted(usage::A + (c as u8 - b'A'))),
        '1'..='9' => Some(Keystroke::plain(usage::KEY_1 + (c as u8 - b'1'))),
        '0' => Some(Keystroke::plain(usage::KEY_0)),
        ' ' => Some(Keystroke::plain(usage::SPACEBAR)),
        '\n' => Some(Keystroke {
            usage: usage::RETURN,
            shift: false,
            settle_ms: NEWLINE_SETTLE_MS,
        }),
        '-' => Some(Keystroke::plain(usage::MINUS)),
        // Shift+' on a US layout
        '"' => Some(Keystroke::shifted(usage::APOSTROPHE)),
        _ => None,
    }
}
