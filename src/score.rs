//! Match state and the table-tennis scoring rule.
//!
//! A set is won by the first player to reach 11 points with a lead of at
//! least two. There is no cap: a set can end 15-13 or 21-19. Sets simply
//! accumulate until the match is reset; there is no match winner.

use crate::config::{SET_MIN_POINTS, SET_WIN_MARGIN};
use crate::error::Error;
use crate::persist::{ScoreKey, ScoreStore};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The other player.
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl TryFrom<u8> for Player {
    type Error = Error;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            1 => Ok(Player::One),
            2 => Ok(Player::Two),
            other => Err(Error::InvalidPlayer(other)),
        }
    }
}

/// The four counters of a match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MatchState {
    pub player1_points: u32,
    pub player2_points: u32,
    pub player1_sets: u32,
    pub player2_sets: u32,
}

impl MatchState {
    /// Build a state from `(p1 points, p2 points, p1 sets, p2 sets)`.
    pub const fn new(
        player1_points: u32,
        player2_points: u32,
        player1_sets: u32,
        player2_sets: u32,
    ) -> Self {
        Self {
            player1_points,
            player2_points,
            player1_sets,
            player2_sets,
        }
    }

    /// Points of `player` in the current set.
    pub const fn points(&self, player: Player) -> u32 {
        match player {
            Player::One => self.player1_points,
            Player::Two => self.player2_points,
        }
    }

    /// Sets won by `player`.
    pub const fn sets(&self, player: Player) -> u32 {
        match player {
            Player::One => self.player1_sets,
            Player::Two => self.player2_sets,
        }
    }

    fn points_mut(&mut self, player: Player) -> &mut u32 {
        match player {
            Player::One => &mut self.player1_points,
            Player::Two => &mut self.player2_points,
        }
    }

    fn sets_mut(&mut self, player: Player) -> &mut u32 {
        match player {
            Player::One => &mut self.player1_sets,
            Player::Two => &mut self.player2_sets,
        }
    }
}

/// Result of a single point event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PointOutcome {
    /// The point was added; the set goes on.
    Point,
    /// The point closed the set for this player; points are back to 0-0.
    SetWon(Player),
}

/// Owns the match state and applies the scoring rule.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scoreboard {
    state: MatchState,
}

impl Scoreboard {
    /// A fresh 0-0 match.
    pub const fn new() -> Self {
        Self {
            state: MatchState::new(0, 0, 0, 0),
        }
    }

    /// Resume from a known state.
    pub const fn from_state(state: MatchState) -> Self {
        Self { state }
    }

    /// Award a point to `player`.
    ///
    /// Only the scorer can close the set, and only on this event: the set
    /// ends when their points reach [`SET_MIN_POINTS`] with a lead of at
    /// least [`SET_WIN_MARGIN`].
    pub fn record_point(&mut self, player: Player) -> PointOutcome {
        // Counters saturate at u32::MAX instead of wrapping; a real match
        // never gets there.
        let points = self.state.points_mut(player);
        *points = points.saturating_add(1);

        let scored = self.state.points(player);
        let opponent = self.state.points(player.opponent());
        if scored >= SET_MIN_POINTS && scored >= opponent.saturating_add(SET_WIN_MARGIN) {
            let sets = self.state.sets_mut(player);
            *sets = sets.saturating_add(1);
            self.state.player1_points = 0;
            self.state.player2_points = 0;
            return PointOutcome::SetWon(player);
        }

        PointOutcome::Point
    }

    /// Zero the whole match, sets included.
    pub fn reset(&mut self) {
        self.state = MatchState::default();
    }

    /// Current counters.
    pub fn snapshot(&self) -> MatchState {
        self.state
    }

    /// Restore the counters from `store`, defaulting absent keys to 0.
    pub fn load(store: &impl ScoreStore) -> Self {
        let read = |key| store.read(key).unwrap_or(0);
        Self::from_state(MatchState {
            player1_points: read(ScoreKey::Player1Points),
            player2_points: read(ScoreKey::Player2Points),
            player1_sets: read(ScoreKey::Player1Sets),
            player2_sets: read(ScoreKey::Player2Sets),
        })
    }

    /// Write all four counters to `store`.
    pub fn save(&self, store: &mut impl ScoreStore) {
        store.write(ScoreKey::Player1Points, self.state.player1_points);
        store.write(ScoreKey::Player2Points, self.state.player2_points);
        store.write(ScoreKey::Player1Sets, self.state.player1_sets);
        store.write(ScoreKey::Player2Sets, self.state.player2_sets);
    }
}

/// Input seam between the scoring core and whatever UI drives it.
pub trait ScoreInput {
    /// Primary button: point for player 1.
    fn on_primary(&mut self) -> PointOutcome;

    /// Secondary button: point for player 2.
    fn on_secondary(&mut self) -> PointOutcome;

    /// Reset gesture: clear the whole match.
    fn on_reset(&mut self);
}

impl ScoreInput for Scoreboard {
    fn on_primary(&mut self) -> PointOutcome {
        self.record_point(Player::One)
    }

    fn on_secondary(&mut self) -> PointOutcome {
        self.record_point(Player::Two)
    }

    fn on_reset(&mut self) {
        self.reset();
    }
}
