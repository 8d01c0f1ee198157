//! Thin client over the `playerctl` command-line tool.
//!
//! Every call spawns a short-lived process and waits for it. Output parsing
//! lives in `parse`, error types in `error`.

use std::fmt;
use std::process::{Command, Stdio};
use std::time::Duration;

use tracing::trace;

use crate::config::PlayerSettings;
use crate::format::truncate_text;
use crate::song::{FieldWidths, NowPlaying, PlaybackStatus, SongInfo};

mod error;
mod parse;

pub use error::PlayerctlError;
pub use parse::{METADATA_FORMAT, Metadata, parse_length, parse_metadata, parse_position};

/// Player control commands forwarded to `playerctl`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerCommand {
    PlayPause,
    Next,
    Previous,
}

impl PlayerCommand {
    /// The `playerctl` subcommand for this command.
    pub fn as_arg(self) -> &'static str {
        match self {
            Self::PlayPause => "play-pause",
            Self::Next => "next",
            Self::Previous => "previous",
        }
    }
}

impl fmt::Display for PlayerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_arg())
    }
}

/// Handle on the `playerctl` binary, optionally pinned to one player.
#[derive(Clone, Debug)]
pub struct Playerctl {
    binary: String,
    player: Option<String>,
}

impl Playerctl {
    pub fn new(binary: impl Into<String>, player: Option<String>) -> Self {
        Self {
            binary: binary.into(),
            player: player.filter(|p| !p.trim().is_empty()),
        }
    }

    pub fn from_settings(settings: &PlayerSettings) -> Self {
        Self::new(settings.binary.clone(), settings.name.clone())
    }

    pub fn player(&self) -> Option<&str> {
        self.player.as_deref()
    }

    /// Run `playerctl [-p PLAYER] <args>` and return its stdout.
    fn run(&self, args: &[&str]) -> Result<String, PlayerctlError> {
        let mut cmd = Command::new(&self.binary);
        if let Some(player) = &self.player {
            cmd.arg("-p").arg(player);
        }
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        trace!(binary = %self.binary, ?args, "running playerctl");
        let output = cmd.output().map_err(|source| PlayerctlError::Spawn {
            binary: self.binary.clone(),
            source,
        })?;

        if !output.status.success() {
            return Err(PlayerctlError::Failed {
                binary: self.binary.clone(),
                args: args.join(" "),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Title, artist, album and status of the current track.
    pub fn metadata(&self) -> Result<Metadata, PlayerctlError> {
        let out = self.run(&["metadata", "--format", METADATA_FORMAT])?;
        Ok(parse_metadata(&out))
    }

    /// Track length, whole seconds.
    pub fn length(&self) -> Result<Duration, PlayerctlError> {
        let out = self.run(&["metadata", "mpris:length"])?;
        Ok(parse_length(&out))
    }

    /// Current playback position.
    pub fn position(&self) -> Result<Duration, PlayerctlError> {
        let out = self.run(&["position"])?;
        Ok(parse_position(&out))
    }

    pub fn send(&self, command: PlayerCommand) -> Result<(), PlayerctlError> {
        self.run(&[command.as_arg()]).map(|_| ())
    }

    /// Everything the song panel needs for one tick.
    ///
    /// Length and position are only queried once the metadata looks like a
    /// real track.
    pub fn song_info(&self, widths: FieldWidths) -> Result<NowPlaying, PlayerctlError> {
        let fields = match self.metadata()? {
            Metadata::Empty => return Ok(NowPlaying::NoSong),
            Metadata::Malformed => return Ok(NowPlaying::UnexpectedFormat),
            Metadata::Track(fields) => fields,
        };

        let length = self.length()?;
        let position = self.position()?;

        Ok(NowPlaying::Song(SongInfo {
            title: truncate_text(&fields.title, widths.title),
            artist: truncate_text(&fields.artist, widths.artist),
            album: truncate_text(&fields.album, widths.album),
            status: PlaybackStatus::parse(&fields.status),
            position,
            length,
        }))
    }
}

#[cfg(test)]
mod tests;
