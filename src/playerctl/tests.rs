use super::*;
use super::parse::TrackFields;
use crate::test_support::{FakePlayerctl, process_lock};

#[test]
fn parse_metadata_trims_fields() {
    let m = parse_metadata("  Paranoid | Black Sabbath |Paranoid (Remaster)| Playing \n");
    assert_eq!(
        m,
        Metadata::Track(TrackFields {
            title: "Paranoid".into(),
            artist: "Black Sabbath".into(),
            album: "Paranoid (Remaster)".into(),
            status: "Playing".into(),
        })
    );
}

#[test]
fn parse_metadata_empty_output_means_no_song() {
    assert_eq!(parse_metadata(""), Metadata::Empty);
    assert_eq!(parse_metadata("  \n"), Metadata::Empty);
}

#[test]
fn parse_metadata_requires_exactly_four_fields() {
    assert_eq!(parse_metadata("a|b|c"), Metadata::Malformed);
    // A pipe inside a title breaks the split.
    assert_eq!(parse_metadata("AC|DC|Back in Black|Back in Black|Playing"), Metadata::Malformed);
}

#[test]
fn parse_metadata_allows_empty_fields() {
    let Metadata::Track(f) = parse_metadata("Untitled|||Paused") else {
        panic!("expected a track");
    };
    assert_eq!(f.title, "Untitled");
    assert!(f.artist.is_empty());
    assert!(f.album.is_empty());
    assert_eq!(f.status, "Paused");
}

#[test]
fn parse_length_converts_micros_to_whole_seconds() {
    assert_eq!(parse_length("296000000\n"), Duration::from_secs(296));
    assert_eq!(parse_length("1999999"), Duration::from_secs(1));
    assert_eq!(parse_length("2.5e8"), Duration::from_secs(250));
}

#[test]
fn parse_length_garbage_is_zero() {
    assert_eq!(parse_length(""), Duration::ZERO);
    assert_eq!(parse_length("No player found"), Duration::ZERO);
    assert_eq!(parse_length("-5"), Duration::ZERO);
}

#[test]
fn parse_position_reads_fractional_seconds() {
    assert_eq!(parse_position("83.5\n"), Duration::from_millis(83_500));
    assert_eq!(parse_position("0"), Duration::ZERO);
    assert_eq!(parse_position("nope"), Duration::ZERO);
    assert_eq!(parse_position("-1.0"), Duration::ZERO);
}

#[test]
fn player_command_args() {
    assert_eq!(PlayerCommand::PlayPause.as_arg(), "play-pause");
    assert_eq!(PlayerCommand::Next.as_arg(), "next");
    assert_eq!(PlayerCommand::Previous.to_string(), "previous");
}

#[test]
fn blank_player_name_is_ignored() {
    assert_eq!(Playerctl::new("playerctl", Some("  ".into())).player(), None);
    assert_eq!(
        Playerctl::new("playerctl", Some("spotify".into())).player(),
        Some("spotify")
    );
}

#[test]
fn song_info_runs_the_three_queries() {
    let _lock = process_lock();
    let fake = FakePlayerctl::playing(" Song | Artist | Album | Playing ", "296000000", "83.52");
    let ctl = Playerctl::new(fake.binary(), None);

    let info = ctl.song_info(FieldWidths::default()).unwrap();
    assert_eq!(
        info,
        NowPlaying::Song(SongInfo {
            title: "Song".into(),
            artist: "Artist".into(),
            album: "Album".into(),
            status: PlaybackStatus::Playing,
            position: Duration::from_secs_f64(83.52),
            length: Duration::from_secs(296),
        })
    );

    assert_eq!(
        fake.calls(),
        vec![
            format!("metadata --format {METADATA_FORMAT}"),
            "metadata mpris:length".to_string(),
            "position".to_string(),
        ]
    );
}

#[test]
fn song_info_truncates_to_field_widths() {
    let _lock = process_lock();
    let fake = FakePlayerctl::playing(
        "A very long title indeed|Someone|An album name|Paused",
        "1000000",
        "0",
    );
    let ctl = Playerctl::new(fake.binary(), None);
    let widths = FieldWidths {
        title: 10,
        artist: 100,
        album: 5,
    };

    let NowPlaying::Song(song) = ctl.song_info(widths).unwrap() else {
        panic!("expected a song");
    };
    assert_eq!(song.title, "A very ...");
    assert_eq!(song.artist, "Someone");
    assert_eq!(song.album, "An...");
    assert_eq!(song.status, PlaybackStatus::Paused);
}

#[test]
fn song_info_stops_early_without_a_track() {
    let _lock = process_lock();
    let fake = FakePlayerctl::playing("", "0", "0");
    let ctl = Playerctl::new(fake.binary(), None);
    assert_eq!(ctl.song_info(FieldWidths::default()).unwrap(), NowPlaying::NoSong);
    assert_eq!(fake.calls().len(), 1);

    let fake = FakePlayerctl::playing("just|three|fields", "0", "0");
    let ctl = Playerctl::new(fake.binary(), None);
    assert_eq!(
        ctl.song_info(FieldWidths::default()).unwrap(),
        NowPlaying::UnexpectedFormat
    );
    assert_eq!(fake.calls().len(), 1);
}

#[test]
fn player_name_is_passed_to_every_call() {
    let _lock = process_lock();
    let fake = FakePlayerctl::playing("t|a|b|Playing", "1000000", "0");
    let ctl = Playerctl::new(fake.binary(), Some("spotify".into()));

    ctl.song_info(FieldWidths::default()).unwrap();
    ctl.send(PlayerCommand::Next).unwrap();

    let calls = fake.calls();
    assert_eq!(calls.len(), 4);
    assert!(calls.iter().all(|c| c.starts_with("-p spotify ")));
    assert_eq!(calls[3], "-p spotify next");
}

#[test]
fn send_runs_the_control_subcommand() {
    let _lock = process_lock();
    let fake = FakePlayerctl::new("");
    let ctl = Playerctl::new(fake.binary(), None);

    ctl.send(PlayerCommand::PlayPause).unwrap();
    ctl.send(PlayerCommand::Previous).unwrap();
    assert_eq!(fake.calls(), vec!["play-pause", "previous"]);
}

#[test]
fn failing_playerctl_reports_stderr() {
    let _lock = process_lock();
    let fake = FakePlayerctl::new("echo 'No players found' >&2\nexit 1");
    let ctl = Playerctl::new(fake.binary(), None);

    let err = ctl.song_info(FieldWidths::default()).unwrap_err();
    assert!(matches!(err, PlayerctlError::Failed { .. }));
    assert_eq!(err.to_string(), "No players found");
}

#[test]
fn silent_failure_reports_exit_status() {
    let _lock = process_lock();
    let fake = FakePlayerctl::new("exit 2");
    let ctl = Playerctl::new(fake.binary(), None);

    let err = ctl.send(PlayerCommand::Next).unwrap_err();
    assert!(err.to_string().contains('2'), "{err}");
}

#[test]
fn missing_binary_is_a_spawn_error() {
    let _lock = process_lock();
    let ctl = Playerctl::new("/nonexistent/definitely-not-playerctl", None);
    let err = ctl.metadata().unwrap_err();
    assert!(matches!(err, PlayerctlError::Spawn { .. }));
    assert!(err.to_string().contains("definitely-not-playerctl"));
}
