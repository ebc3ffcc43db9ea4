//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, scoring constants and
//! the flash layout live here so they can be tuned in one place.

// Scoring

/// Minimum number of points needed to win a set.
pub const SET_MIN_POINTS: u32 = 11;

/// Required lead over the opponent to close out a set.
pub const SET_WIN_MARGIN: u32 = 2;

// Display

/// Static title shown on the first display line.
pub const TITLE: &str = "Bordtennis";

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Button UP      → P0.11   (player 1 point)
//   Button DOWN    → P0.12   (player 2 point)
//   Button SELECT  → P0.24   (hold to reset)
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27

/// Button debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 20;

/// Repeat interval while UP/DOWN is held (ms).
pub const BUTTON_REPEAT_INTERVAL_MS: u64 = 50;

/// How long SELECT must be held before the match is reset (ms).
pub const RESET_HOLD_MS: u64 = 3000;

/// Capacity of the button → main loop event channel.
pub const BUTTON_CHANNEL_CAPACITY: usize = 4;

// Score storage

/// Quiet period after the last button event before the score is committed
/// to flash (ms). The device never "exits", so this stands in for shutdown.
pub const SAVE_IDLE_MS: u64 = 2000;

/// Flash page index where score storage starts (4 KB per page on nRF52840).
pub const STORAGE_FLASH_PAGE_START: u32 = 240;

/// Number of flash pages reserved for score storage.
pub const STORAGE_FLASH_PAGE_COUNT: u32 = 2;
