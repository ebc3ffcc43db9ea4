//! GPIO button input with async debouncing.
//!
//! Three physical buttons (active-low with internal pull-up):
//!   - UP     - point for player 1, repeats while held
//!   - DOWN   - point for player 2, repeats while held
//!   - SELECT - hold to reset the match
//!
//! Each button is handled by an async task that waits for a GPIO edge,
//! debounces it, then sends its `ButtonEvent` to the UI channel every time
//! the button's `ClickPolicy` fires until the button is released.

use crate::config::{BUTTON_CHANNEL_CAPACITY, BUTTON_DEBOUNCE_MS};
use crate::ui::ButtonEvent;
use bordtennis::ui::input_logic::{ClickStep, ClickTracker};
use defmt::{debug, info};
use embassy_futures::select::select;
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Sender;
use embassy_time::{Duration, Instant, Timer};

/// Sending half of the button → main loop channel.
pub type ButtonSender =
    Sender<'static, CriticalSectionRawMutex, ButtonEvent, BUTTON_CHANNEL_CAPACITY>;

/// Run a single button polling loop.
///
/// Waits for the pin to go low (pressed), debounces, then fires according
/// to the button's policy until the pin is high again. The pin level is
/// re-sampled before every step, so a release during a blocked `send` ends
/// the press.
pub async fn button_task(pin: AnyPin, event: ButtonEvent, tx: ButtonSender) -> ! {
    let mut btn = Input::new(pin, Pull::Up);

    loop {
        // Wait for falling edge (button press, active-low).
        btn.wait_for_falling_edge().await;
        let pressed_at = Instant::now();

        // Debounce: wait and re-check.
        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
        if btn.is_high() {
            continue;
        }

        let mut click = ClickTracker::new(event.click_policy());
        loop {
            match click.step(btn.is_high(), pressed_at.elapsed().as_millis()) {
                ClickStep::Fire => {
                    if click.fired() == 1 {
                        info!("Button: {}", event);
                    }
                    tx.send(event).await;
                }
                ClickStep::WaitUntil(at_ms) => {
                    let deadline = pressed_at + Duration::from_millis(at_ms);
                    select(btn.wait_for_high(), Timer::at(deadline)).await;
                }
                ClickStep::WaitForRelease => btn.wait_for_high().await,
                ClickStep::Released => break,
            }
        }

        debug!("Button: {} released after {} firings", event, click.fired());
        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
    }
}
