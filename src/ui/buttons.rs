//! GPIO button input with async debouncing.
//!
//! Four physical buttons (active-low with internal pull-up):
//!   - UP     - move cursor up
//!   - DOWN   - move cursor down
//!   - OK     - select / confirm
//!   - BACK   - previous screen, exit from the main menu
//!
//! Each button is handled by an async task that waits for a GPIO edge,
//! debounces it, and sends press and release events to the UI channel.

use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use embassy_time::{Duration, Timer};

use super::{ButtonEvent, InputEvent};
use crate::config::BUTTON_DEBOUNCE_MS;

/// Queue depth between the button tasks and the menu loop.
pub const EVENT_QUEUE_DEPTH: usize = 4;

pub type EventChannel = Channel<CriticalSectionRawMutex, InputEvent, EVENT_QUEUE_DEPTH>;
pub type EventSender = Sender<'static, CriticalSectionRawMutex, InputEvent, EVENT_QUEUE_DEPTH>;
pub type EventReceiver = Receiver<'static, CriticalSectionRawMutex, InputEvent, EVENT_QUEUE_DEPTH>;

/// Run a single button polling loop.
///
/// Waits for the pin to go low (pressed), debounces, sends the press,
/// then waits for release and sends that too.
pub async fn button_task(pin: AnyPin, button: ButtonEvent, tx: EventSender) -> ! {
    let mut btn = Input::new(pin, Pull::Up);
    let debounce = Duration::from_millis(BUTTON_DEBOUNCE_MS);

    loop {
        btn.wait_for_falling_edge().await;
        Timer::after(debounce).await;

        if btn.is_low() {
            debug!("Button: {:?}", button);
            if tx.try_send(InputEvent::press(button)).is_err() {
                warn!("Button queue full, dropping {:?}", button);
            }

            btn.wait_for_rising_edge().await;
            Timer::after(debounce).await;
            if tx.try_send(InputEvent::release(button)).is_err() {
                warn!("Button queue full, dropping {:?} release", button);
            }
        }
    }
}
