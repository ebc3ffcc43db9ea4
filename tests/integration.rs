//! Integration tests for bordtennis host-testable logic.

use bordtennis::ui::input_logic::dispatch;
use bordtennis::ui::text::ScoreLines;
use bordtennis::ui::{ButtonEvent, ClickPolicy};
use bordtennis::{MatchState, Player, PointOutcome, ScoreKey, ScoreStore, Scoreboard, StoredScores};

/// Feed a press of `button` held for `held_ms` through the scoreboard.
fn press(scoreboard: &mut Scoreboard, button: ButtonEvent, held_ms: u64) {
    for _ in 0..button.click_policy().fires_within(held_ms) {
        dispatch(scoreboard, button.action());
    }
}

#[test]
fn restart_resumes_saved_match() {
    // First session: play into a deuce, then shut down.
    let mut flash = StoredScores::new();
    let mut sb = Scoreboard::load(&flash);
    for _ in 0..10 {
        press(&mut sb, ButtonEvent::Up, 0);
        press(&mut sb, ButtonEvent::Down, 0);
    }
    sb.save(&mut flash);
    assert!(flash.is_dirty());

    // Second session: same values come back.
    let resumed = Scoreboard::load(&flash);
    assert_eq!(resumed.snapshot(), MatchState::new(10, 10, 0, 0));
}

#[test]
fn holding_up_plays_out_a_set() {
    let mut sb = Scoreboard::new();
    let policy = ButtonEvent::Up.click_policy();
    assert_eq!(policy, ClickPolicy::Repeating { interval_ms: 50 });

    // 500 ms hold = press + 10 repeats = 11 points, closing the set 11-0.
    press(&mut sb, ButtonEvent::Up, 500);
    assert_eq!(sb.snapshot(), MatchState::new(0, 0, 1, 0));
}

#[test]
fn short_select_press_does_not_reset() {
    let mut sb = Scoreboard::from_state(MatchState::new(5, 3, 2, 1));
    press(&mut sb, ButtonEvent::Select, 2999);
    assert_eq!(sb.snapshot(), MatchState::new(5, 3, 2, 1));

    press(&mut sb, ButtonEvent::Select, 3000);
    assert_eq!(sb.snapshot(), MatchState::default());
}

#[test]
fn set_win_is_reported_once() {
    let mut sb = Scoreboard::from_state(MatchState::new(10, 10, 0, 0));
    let outcomes: Vec<_> = (0..3)
        .map(|_| dispatch(&mut sb, ButtonEvent::Down.action()))
        .collect();
    assert_eq!(
        outcomes,
        vec![
            Some(PointOutcome::Point),
            Some(PointOutcome::SetWon(Player::Two)),
            Some(PointOutcome::Point),
        ]
    );
    assert_eq!(sb.snapshot(), MatchState::new(0, 1, 0, 1));
}

#[test]
fn display_follows_scoreboard() {
    let mut flash = StoredScores::new();
    flash.restore(ScoreKey::Player1Sets, 1);
    let mut sb = Scoreboard::load(&flash);
    press(&mut sb, ButtonEvent::Down, 0);

    let lines = ScoreLines::new(&sb.snapshot()).unwrap();
    assert_eq!(lines.title, "Bordtennis");
    assert_eq!(lines.score.as_str(), "0 - 1");
    assert_eq!(lines.sets.as_str(), "1 sets - 0 sets");
}

#[test]
fn save_overwrites_previous_values() {
    let mut flash = StoredScores::new();
    Scoreboard::from_state(MatchState::new(7, 7, 3, 3)).save(&mut flash);
    flash.mark_clean();

    Scoreboard::new().save(&mut flash);
    assert!(flash.is_dirty());
    for key in ScoreKey::ALL {
        assert_eq!(flash.read(key), Some(0));
    }
}
