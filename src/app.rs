//! Application loop.
//!
//! Owns the [`AppState`] for the lifetime of [`run`], polls input, ticks the
//! splash timer and redraws at a fixed cadence. While a command is being
//! sent the loop only awaits the emitter and the post-send pause; input
//! that arrives meanwhile is thrown away.

use embedded_hal_async::delay::DelayNs;

use crate::config::{POST_SEND_DELAY_MS, TICK_MS};
use crate::hid::{send_command, KeyboardHost, Timing};
use crate::ui::state::{AppState, Request};
use crate::ui::InputEvent;

/// Display and input side of the platform.
pub trait Frontend {
    /// Next pending button edge, if any.
    fn next_event(&mut self) -> Option<InputEvent>;

    /// Draw the given state to the screen.
    fn redraw(&mut self, state: &AppState);

    /// Drop input buffered while the loop was blocked.
    fn discard_pending(&mut self);

    /// Release the display and input resources.
    fn shutdown(&mut self);
}

/// What happened during one [`run`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RunSummary {
    pub ticks: u32,
    pub commands_sent: u32,
}

/// Run the menu until the user backs out of the main menu.
pub async fn run<F, H, D>(frontend: &mut F, keyboard: &mut H, delay: &mut D) -> RunSummary
where
    F: Frontend,
    H: KeyboardHost,
    D: DelayNs,
{
    let mut state = AppState::new();
    let mut summary = RunSummary::default();
    info!("Menu started");

    while state.running {
        while let Some(event) = frontend.next_event() {
            debug!("Input: {:?} on {:?}", event, state.screen);
            if let Some(Request::Send(cmd)) = state.handle_event(event) {
                frontend.redraw(&state);
                info!("Sending '{}'", cmd.name);
                let outcome = send_command(keyboard, delay, cmd.command, Timing::DEFAULT).await;
                debug!("Send outcome: {:?}", outcome);
                delay.delay_ms(POST_SEND_DELAY_MS).await;
                state.finish_send();
                frontend.discard_pending();
                summary.commands_sent += 1;
            }
            if !state.running {
                break;
            }
        }
        if !state.running {
            break;
        }

        state.tick();
        frontend.redraw(&state);
        delay.delay_ms(TICK_MS).await;
        summary.ticks += 1;
    }

    info!("Menu exiting");
    frontend.shutdown();
    summary
}
