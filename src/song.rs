//! Now-playing data model.
//!
//! A `SongInfo` is rebuilt from scratch on every poll; nothing here is
//! stored between ticks.

use std::fmt;
use std::time::Duration;

/// Playback status as reported by the player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlaybackStatus {
    Playing,
    Paused,
    Stopped,
    /// Anything the player reports that we do not recognize.
    Other(String),
}

impl PlaybackStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "Playing" => Self::Playing,
            "Paused" => Self::Paused,
            "Stopped" => Self::Stopped,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for PlaybackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Playing => f.write_str("Playing"),
            Self::Paused => f.write_str("Paused"),
            Self::Stopped => f.write_str("Stopped"),
            Self::Other(s) => f.write_str(s),
        }
    }
}

/// One poll worth of track information, already trimmed and truncated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SongInfo {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub status: PlaybackStatus,
    pub position: Duration,
    pub length: Duration,
}

/// What the song panel currently shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum NowPlaying {
    /// No poll has completed yet.
    #[default]
    Loading,
    Song(SongInfo),
    /// The player answered with empty metadata.
    NoSong,
    /// The metadata line did not split into the expected fields.
    UnexpectedFormat,
    /// The external tool failed; holds the stringified error.
    Error(String),
}

impl NowPlaying {
    /// Message shown in place of song details, if this is not a song.
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Loading => Some("Waiting for player...".to_string()),
            Self::Song(_) => None,
            Self::NoSong => Some("No song is currently playing.".to_string()),
            Self::UnexpectedFormat => Some("Unexpected output format.".to_string()),
            Self::Error(e) => Some(format!("Error: {e}")),
        }
    }
}

/// Display widths applied to the text fields of a `SongInfo`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldWidths {
    pub title: usize,
    pub artist: usize,
    pub album: usize,
}

impl Default for FieldWidths {
    fn default() -> Self {
        Self {
            title: 100,
            artist: 100,
            album: 40,
        }
    }
}
