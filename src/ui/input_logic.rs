//! Button semantics that do not depend on GPIO: which button does what,
//! and when a held button fires.

use crate::config::{BUTTON_REPEAT_INTERVAL_MS, RESET_HOLD_MS};
use crate::score::{PointOutcome, ScoreInput};

/// Physical button events (after debouncing).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    Up,
    Down,
    Select,
}

/// What a button firing means for the match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonAction {
    /// Point for player 1.
    Primary,
    /// Point for player 2.
    Secondary,
    /// Clear the match.
    Reset,
}

impl ButtonEvent {
    /// Action bound to this button.
    pub const fn action(self) -> ButtonAction {
        match self {
            ButtonEvent::Up => ButtonAction::Primary,
            ButtonEvent::Down => ButtonAction::Secondary,
            ButtonEvent::Select => ButtonAction::Reset,
        }
    }

    /// Firing policy for this button.
    pub const fn click_policy(self) -> ClickPolicy {
        match self {
            ButtonEvent::Up | ButtonEvent::Down => ClickPolicy::Repeating {
                interval_ms: BUTTON_REPEAT_INTERVAL_MS,
            },
            ButtonEvent::Select => ClickPolicy::Long {
                hold_ms: RESET_HOLD_MS,
            },
        }
    }
}

/// Forward `action` to `input`. Returns the point outcome, `None` for reset.
pub fn dispatch(input: &mut impl ScoreInput, action: ButtonAction) -> Option<PointOutcome> {
    match action {
        ButtonAction::Primary => Some(input.on_primary()),
        ButtonAction::Secondary => Some(input.on_secondary()),
        ButtonAction::Reset => {
            input.on_reset();
            None
        }
    }
}

/// When a pressed button fires, relative to the moment it went down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClickPolicy {
    /// Fire on press, then every `interval_ms` while held.
    Repeating { interval_ms: u64 },
    /// Fire once after the button has been held for `hold_ms`.
    Long { hold_ms: u64 },
}

impl ClickPolicy {
    /// Offset (ms after press) of firing number `fired` (0-based), or `None`
    /// if the press will not fire again.
    pub fn fire_offset_ms(&self, fired: u32) -> Option<u64> {
        match *self {
            ClickPolicy::Repeating { interval_ms } => {
                if fired > 0 && interval_ms == 0 {
                    return None;
                }
                interval_ms.checked_mul(u64::from(fired))
            }
            ClickPolicy::Long { hold_ms } => (fired == 0).then_some(hold_ms),
        }
    }

    /// Number of firings produced by a press released after `held_ms`.
    ///
    /// A firing scheduled exactly at release time counts.
    pub fn fires_within(&self, held_ms: u64) -> u32 {
        match *self {
            ClickPolicy::Repeating { interval_ms: 0 } => 1,
            ClickPolicy::Repeating { interval_ms } => {
                let n = held_ms / interval_ms + 1;
                u32::try_from(n).unwrap_or(u32::MAX)
            }
            ClickPolicy::Long { hold_ms } => u32::from(held_ms >= hold_ms),
        }
    }
}

/// Next thing a button task should do while a press is in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClickStep {
    /// Send one event now.
    Fire,
    /// Nothing due yet; wait for release or until this offset (ms after press).
    WaitUntil(u64),
    /// The policy is exhausted; wait for release.
    WaitForRelease,
    /// The button is up; the press is over.
    Released,
}

/// Tracks one press of a button against its [`ClickPolicy`].
///
/// The caller samples the pin level and the time since press before every
/// step, so a release is seen no matter when it happened (including while
/// the previous event was blocked on a full channel). Deadlines missed
/// during such a stall collapse into a single firing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClickTracker {
    policy: ClickPolicy,
    slot: u32,
    fired: u32,
    released: bool,
}

impl ClickTracker {
    /// Start tracking a press that just went down.
    pub const fn new(policy: ClickPolicy) -> Self {
        Self {
            policy,
            slot: 0,
            fired: 0,
            released: false,
        }
    }

    /// Events sent for this press so far.
    pub fn fired(&self) -> u32 {
        self.fired
    }

    /// Decide what to do given the current pin state and time since press.
    pub fn step(&mut self, released: bool, elapsed_ms: u64) -> ClickStep {
        self.released |= released;
        if self.released {
            return ClickStep::Released;
        }

        match self.policy.fire_offset_ms(self.slot) {
            None => ClickStep::WaitForRelease,
            Some(at) if elapsed_ms < at => ClickStep::WaitUntil(at),
            Some(_) => {
                self.slot += 1;
                while matches!(self.policy.fire_offset_ms(self.slot), Some(at) if at <= elapsed_ms)
                {
                    self.slot += 1;
                }
                self.fired += 1;
                ClickStep::Fire
            }
        }
    }
}
