//! Host-testable library for the bordtennis scoreboard.
//!
//! This crate holds every piece of pure logic - the scoring rule, the
//! persisted key layout, click timing and the display text - so it can be
//! tested on the host (no embedded hardware required).
//!
//! Usage: `cargo test`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and links against this library for everything that is not GPIO, I²C or
//! flash.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod error;
pub mod persist;
pub mod score;

// Internal module paths for the UI logic; `ui/mod.rs` itself belongs to the
// embedded binary.
#[path = "ui/input_logic.rs"]
mod ui_input_logic_impl;
#[path = "ui/text.rs"]
mod ui_text_impl;

pub mod ui {
    pub use crate::ui_input_logic_impl::{ButtonAction, ButtonEvent, ClickPolicy};

    pub mod input_logic {
        pub use crate::ui_input_logic_impl::*;
    }

    pub mod text {
        pub use crate::ui_text_impl::*;
    }
}

pub use error::Error;
pub use persist::{ScoreKey, ScoreStore, StoredScores};
pub use score::{MatchState, Player, PointOutcome, ScoreInput, Scoreboard};

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
