//! Text → keystroke emitter.
//!
//! Typing a command is modelled as a [`TypingSession`]: a bounded state
//! machine that yields one [`Action`] at a time (enable the keyboard, wait,
//! send a report, restore). It owns no clock and no USB handle, so key
//! sequences and timing can be checked on the host. [`send_command`] is the
//! driver that executes those actions against a [`KeyboardHost`] and an
//! `embedded-hal-async` delay. Its caller does nothing else until it
//! returns.
//!
//! Sequence for one session:
//!
//! 1. `Activate`.
//! 2. Poll host readiness every `poll_interval_ms`, at most
//!    `poll_attempts` times. If the host never becomes ready, finish with
//!    [`SendOutcome::HostTimeout`] without touching a key and without
//!    restoring the port.
//! 3. Wait `connect_settle_ms`.
//! 4. Per mapped character: press report, hold, release report, gap, and
//!    the keystroke's own settle time (Return only).
//! 5. `Restore`.

use core::str::Chars;

use embedded_hal_async::delay::DelayNs;

use super::keyboard::KeyboardReport;
use super::keymap::{keystroke_for, Keystroke};
use crate::config;
use crate::error::Error;

/// The USB side of typing: whatever can enumerate as a keyboard and push
/// reports to a host.
#[allow(async_fn_in_trait)]
pub trait KeyboardHost {
    /// Switch the USB port to the keyboard class.
    fn activate(&mut self);

    /// `true` once the host has configured the keyboard.
    fn is_connected(&mut self) -> bool;

    /// Push one input report to the host.
    async fn send_report(&mut self, report: &KeyboardReport) -> Result<(), Error>;

    /// Return the USB port to its previous configuration.
    fn restore(&mut self);
}

/// Delays used while typing. All values in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    pub poll_interval_ms: u32,
    pub poll_attempts: u16,
    pub connect_settle_ms: u32,
    pub key_hold_ms: u32,
    pub key_gap_ms: u32,
}

impl Timing {
    pub const DEFAULT: Self = Self {
        poll_interval_ms: config::HID_CONNECT_POLL_MS,
        poll_attempts: config::HID_CONNECT_ATTEMPTS,
        connect_settle_ms: config::HID_CONNECT_SETTLE_MS,
        key_hold_ms: config::KEY_HOLD_MS,
        key_gap_ms: config::KEY_GAP_MS,
    };
}

impl Default for Timing {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// One step the driver must carry out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    Activate,
    Wait(u32),
    Report(KeyboardReport),
    Restore,
}

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SendOutcome {
    /// The host was ready; `typed` characters were sent and `dropped`
    /// had no key mapping.
    Typed { typed: usize, dropped: usize },
    /// The host never configured the keyboard; nothing was typed.
    HostTimeout,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Activate,
    AwaitHost { attempts: u16 },
    NextChar,
    Hold(Keystroke),
    Release(Keystroke),
    Gap(Keystroke),
    Settle(Keystroke),
    Restore,
    Done,
}

/// Bounded state machine for typing one string.
pub struct TypingSession<'a> {
    chars: Chars<'a>,
    timing: Timing,
    phase: Phase,
    typed: usize,
    dropped: usize,
    timed_out: bool,
}

impl<'a> TypingSession<'a> {
    pub fn new(text: &'a str, timing: Timing) -> Self {
        Self {
            chars: text.chars(),
            timing,
            phase: Phase::Activate,
            typed: 0,
            dropped: 0,
            timed_out: false,
        }
    }

    /// `true` while the session is waiting for the host, i.e. when the
    /// `host_ready` argument of [`next_action`](Self::next_action) matters.
    pub fn is_awaiting_host(&self) -> bool {
        matches!(self.phase, Phase::AwaitHost { .. })
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Advance to the next action. Returns `None` once finished.
    ///
    /// `host_ready` is only read while [`is_awaiting_host`](Self::is_awaiting_host).
    pub fn next_action(&mut self, host_ready: bool) -> Option<Action> {
        loop {
            match self.phase {
                Phase::Activate => {
                    self.phase = Phase::AwaitHost { attempts: 0 };
                    return Some(Action::Activate);
                }
                Phase::AwaitHost { attempts } => {
                    if host_ready {
                        self.phase = Phase::NextChar;
                        return Some(Action::Wait(self.timing.connect_settle_ms));
                    }
                    if attempts < self.timing.poll_attempts {
                        self.phase = Phase::AwaitHost {
                            attempts: attempts + 1,
                        };
                        return Some(Action::Wait(self.timing.poll_interval_ms));
                    }
                    // The keyboard stays enabled; only a finished send restores.
                    self.timed_out = true;
                    self.phase = Phase::Done;
                }
                Phase::NextChar => match self.chars.next() {
                    Some(c) => match keystroke_for(c) {
                        Some(key) => {
                            self.phase = Phase::Hold(key);
                            return Some(Action::Report(KeyboardReport::key(key.usage, key.shift)));
                        }
                        None => self.dropped += 1,
                    },
                    None => self.phase = Phase::Restore,
                },
                Phase::Hold(key) => {
                    self.phase = Phase::Release(key);
                    return Some(Action::Wait(self.timing.key_hold_ms));
                }
                Phase::Release(key) => {
                    self.phase = Phase::Gap(key);
                    return Some(Action::Report(KeyboardReport::empty()));
                }
                Phase::Gap(key) => {
                    self.typed += 1;
                    self.phase = if key.settle_ms > 0 {
                        Phase::Settle(key)
                    } else {
                        Phase::NextChar
                    };
                    return Some(Action::Wait(self.timing.key_gap_ms));
                }
                Phase::Settle(key) => {
                    self.phase = Phase::NextChar;
                    return Some(Action::Wait(key.settle_ms));
                }
                Phase::Restore => {
                    self.phase = Phase::Done;
                    return Some(Action::Restore);
                }
                Phase::Done => return None,
            }
        }
    }

    /// Result of the session, available once [`is_done`](Self::is_done).
    pub fn outcome(&self) -> Option<SendOutcome> {
        if !self.is_done() {
            return None;
        }
        if self.timed_out {
            Some(SendOutcome::HostTimeout)
        } else {
            Some(SendOutcome::Typed {
                typed: self.typed,
                dropped: self.dropped,
            })
        }
    }
}

/// Type `text` on the host. Completes once the port has been restored, or
/// straight after the readiness checks run out.
///
/// There is no cancellation. Never fails from the caller's point of view:
/// a host that never shows up and characters without a key mapping are both
/// reported only through the returned [`SendOutcome`].
pub async fn send_command<H, D>(
    host: &mut H,
    delay: &mut D,
    text: &str,
    timing: Timing,
) -> SendOutcome
where
    H: KeyboardHost,
    D: DelayNs,
{
    let mut session = TypingSession::new(text, timing);

    loop {
        let ready = session.is_awaiting_host() && host.is_connected();
        let Some(action) = session.next_action(ready) else {
            break;
        };
        match action {
            Action::Activate => host.activate(),
            Action::Wait(ms) => delay.delay_ms(ms).await,
            Action::Report(report) => {
                if let Err(e) = host.send_report(&report).await {
                    warn!("HID report write failed: {:?}", e);
                }
            }
            Action::Restore => host.restore(),
        }
    }

    let outcome = session.outcome().unwrap_or(SendOutcome::HostTimeout);
    match outcome {
        SendOutcome::Typed { typed, dropped } => {
            info!("Typed {} chars ({} without key mapping)", typed, dropped)
        }
        SendOutcome::HostTimeout => warn!("Host did not configure keyboard, nothing typed"),
    }
    outcome
}
