//! User interface subsystem - menu state machine, rendering, input.
//!
//! The application loop feeds button edges into [`state::AppState`] and
//! redraws the current screen through the [`canvas::Canvas`] primitives.
//!
//! ## Components
//!
//! - **State**: screens, cursor, staged command
//! - **Render**: one draw routine per screen, pure function of state
//! - **Display** (embedded): SSD1306 128×64 OLED via I²C
//! - **Buttons** (embedded): 4 tactile switches with debouncing (UP, DOWN, OK, BACK)
//! - **Panel** (embedded): display + buttons as the loop's `Frontend`

#[cfg(feature = "embedded")]
pub mod buttons;
pub mod canvas;
pub mod cursor;
#[cfg(feature = "embedded")]
pub mod display;
#[cfg(feature = "embedded")]
pub mod panel;
pub mod render;
pub mod state;

/// Physical button events (after debouncing).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    Up,
    Down,
    /// OK / confirm.
    Select,
    Back,
}

/// Which edge of a button press was seen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    Press,
    Release,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputEvent {
    pub button: ButtonEvent,
    pub edge: Edge,
}

impl InputEvent {
    pub const fn press(button: ButtonEvent) -> Self {
        Self {
            button,
            edge: Edge::Press,
        }
    }

    pub const fn release(button: ButtonEvent) -> Self {
        Self {
            button,
            edge: Edge::Release,
        }
    }
}
