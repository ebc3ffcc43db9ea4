//! Text shown on the scoreboard screen.
//!
//! ```text
//! Bordtennis
//! 10 - 9
//! 2 sets - 1 sets
//! ```

use core::fmt::Write;

use heapless::String;

use crate::config::TITLE;
use crate::error::Error;
use crate::score::MatchState;

/// Capacity of the score line ("4294967295 - 4294967295").
pub const SCORE_LINE_LEN: usize = 24;

/// Capacity of the sets line ("4294967295 sets - 4294967295 sets").
pub const SETS_LINE_LEN: usize = 40;

/// The three display lines for one match state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreLines {
    pub title: &'static str,
    pub score: String<SCORE_LINE_LEN>,
    pub sets: String<SETS_LINE_LEN>,
}

impl ScoreLines {
    /// Format the lines for `state`.
    pub fn new(state: &MatchState) -> Result<Self, Error> {
        let mut score = String::new();
        write!(
            score,
            "{} - {}",
            state.player1_points, state.player2_points
        )?;

        let mut sets = String::new();
        write!(
            sets,
            "{} sets - {} sets",
            state.player1_sets, state.player2_sets
        )?;

        Ok(Self {
            title: TITLE,
            score,
            sets,
        })
    }
}
