//! User interface subsystem - OLED display + physical buttons.
//!
//! The main task owns the display and redraws the scoreboard after every
//! button action; each button runs in its own task and feeds the main loop
//! through a channel.
//!
//! ## Components
//!
//! - **Display**: SSD1306 128×64 OLED via I²C
//! - **Buttons**: 3 tactile switches with debouncing (UP, DOWN, SELECT)

pub mod buttons;
pub mod display;

pub use bordtennis::ui::ButtonEvent;
