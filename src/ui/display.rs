//! SSD1306 OLED display wrapper.

use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

use super::canvas::GraphicsCanvas;
use super::render::render;
use super::state::AppState;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Initialise the SSD1306 display and clear the screen.
pub fn init<I2C>(i2c: I2C) -> Display<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    log_failure("init", display.init());
    display.clear_buffer();
    log_failure("flush", display.flush());
    display
}

/// Render `state` into the frame buffer and push it to the panel.
pub fn draw<I2C>(display: &mut Display<I2C>, state: &AppState)
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();
    render(&mut GraphicsCanvas::new(display), state);
    log_failure("flush", display.flush());
}

/// Blank the panel and switch it off.
pub fn power_off<I2C>(display: &mut Display<I2C>)
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();
    log_failure("flush", display.flush());
    log_failure("power off", display.set_display_on(false));
}

/// The panel keeps running without a working screen; failures are only
/// logged.
fn log_failure<E: core::fmt::Debug>(op: &'static str, result: Result<(), E>) {
    if let Err(e) = result {
        warn!("Display {} failed: {}", op, defmt::Debug2Format(&e));
    }
}
