//! Board front panel: OLED display plus buttons, as one [`Frontend`].

use super::buttons::EventReceiver;
use super::display::{self, Display};
use super::state::AppState;
use super::InputEvent;
use crate::app::Frontend;

pub struct Panel<I2C> {
    display: Display<I2C>,
    events: EventReceiver,
}

impl<I2C> Panel<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    pub fn new(display: Display<I2C>, events: EventReceiver) -> Self {
        Self { display, events }
    }
}

impl<I2C> Frontend for Panel<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn next_event(&mut self) -> Option<InputEvent> {
        self.events.try_receive().ok()
    }

    fn redraw(&mut self, state: &AppState) {
        display::draw(&mut self.display, state);
    }

    fn discard_pending(&mut self) {
        let mut dropped = 0u32;
        while self.events.try_receive().is_ok() {
            dropped += 1;
        }
        if dropped > 0 {
            debug!("Discarded {} button events", dropped);
        }
    }

    fn shutdown(&mut self) {
        display::power_off(&mut self.display);
    }
}
