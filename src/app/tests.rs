use super::*;
use crate::keymap::Action;
use crate::playerctl::PlayerCommand;
use crate::poller::{PollUpdate, PollerCmd};
use crate::song::NowPlaying;
use std::time::{Duration, Instant};

fn app() -> App {
    App::new(Duration::from_secs(3))
}

#[test]
fn starts_loading() {
    let app = app();
    assert_eq!(app.now_playing, NowPlaying::Loading);
    assert!(app.status.is_none());
    assert!(!app.should_quit);
}

#[test]
fn poll_results_replace_the_panel() {
    let mut app = app();
    app.apply(PollUpdate::NowPlaying(NowPlaying::NoSong));
    assert_eq!(app.now_playing, NowPlaying::NoSong);

    app.apply(PollUpdate::NowPlaying(NowPlaying::Error("boom".into())));
    assert_eq!(app.now_playing, NowPlaying::Error("boom".into()));
}

#[test]
fn control_failures_show_a_temporary_message() {
    let mut app = app();
    let now = Instant::now();
    app.apply_at(
        PollUpdate::ControlFailed {
            command: PlayerCommand::Next,
            message: "No players found".into(),
        },
        now,
    );

    // The panel itself is untouched.
    assert_eq!(app.now_playing, NowPlaying::Loading);
    assert_eq!(
        app.status_text(now),
        Some("Error occurred (next): No players found")
    );
    assert_eq!(
        app.status_text(now + Duration::from_secs(2)),
        Some("Error occurred (next): No players found")
    );
    assert_eq!(app.status_text(now + Duration::from_secs(3)), None);

    app.expire_status(now + Duration::from_secs(1));
    assert!(app.status.is_some());
    app.expire_status(now + Duration::from_secs(4));
    assert!(app.status.is_none());
}

#[test]
fn actions_map_to_player_commands() {
    let mut app = app();
    assert!(matches!(
        app.handle_action(Action::PlayPause),
        Some(PollerCmd::Control(PlayerCommand::PlayPause))
    ));
    assert!(matches!(
        app.handle_action(Action::Next),
        Some(PollerCmd::Control(PlayerCommand::Next))
    ));
    assert!(matches!(
        app.handle_action(Action::Previous),
        Some(PollerCmd::Control(PlayerCommand::Previous))
    ));
    assert!(!app.should_quit);
}

#[test]
fn quit_sets_the_flag_and_sends_nothing() {
    let mut app = app();
    assert!(app.handle_action(Action::Quit).is_none());
    assert!(app.should_quit);
}
