use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize, de::Error as _};

use crate::song::FieldWidths;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/nowplaying/config.toml` or `~/.config/nowplaying/config.toml`
///
/// Precedence (highest wins):
/// 1) Command-line flags
/// 2) Environment variables (prefix `NOWPLAYING__`, `__` as nested separator)
/// 3) Config file (if present)
/// 4) Struct defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub player: PlayerSettings,
    pub poll: PollSettings,
    pub ui: UiSettings,
    pub controls: ControlsSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Name or path of the `playerctl` executable.
    pub binary: String,
    /// Player to pin every call to (`playerctl -p NAME`).
    /// Unset means whichever player `playerctl` picks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            binary: "playerctl".to_string(),
            name: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PollSettings {
    /// Time between two refreshes of the song panel (milliseconds).
    pub interval_ms: u64,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self { interval_ms: 1000 }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UiSettings {
    /// Title shown at the top of the window.
    pub window_title: String,
    /// Draw a border around the title area.
    pub border: bool,
    /// Width of the centered song panel, in columns.
    pub panel_width: u16,
    /// Maximum title length before it is cut with `...`.
    pub title_width: usize,
    /// Maximum artist length before it is cut with `...`.
    pub artist_width: usize,
    /// Maximum album length before it is cut with `...`.
    pub album_width: usize,
    /// Number of cells in the progress bar.
    pub progress_width: usize,
    /// How long error messages from player controls stay visible (milliseconds).
    pub status_timeout_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            window_title: "  Now Playing ".to_string(),
            border: false,
            panel_width: 52,
            title_width: 100,
            artist_width: 100,
            album_width: 40,
            progress_width: 25,
            status_timeout_ms: 3000,
        }
    }
}

impl UiSettings {
    pub fn field_widths(&self) -> FieldWidths {
        FieldWidths {
            title: self.title_width,
            artist: self.artist_width,
            album: self.album_width,
        }
    }
}

/// Single-key bindings. Ctrl-C always quits regardless of these.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ControlsSettings {
    #[serde(deserialize_with = "key_binding")]
    pub play_pause: char,
    #[serde(deserialize_with = "key_binding")]
    pub next: char,
    #[serde(deserialize_with = "key_binding")]
    pub previous: char,
    #[serde(deserialize_with = "key_binding")]
    pub quit: char,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self {
            play_pause: 'p',
            next: 'n',
            previous: 'b',
            quit: 'q',
        }
    }
}

/// A binding is a one-char string, or a single digit. Environment values
/// such as `NOWPLAYING__CONTROLS__NEXT=5` arrive as integers.
fn key_binding<'de, D: Deserializer<'de>>(deserializer: D) -> Result<char, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Char(char),
        Digit(u64),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Char(c) => Ok(c),
        Raw::Digit(n) => u32::try_from(n)
            .ok()
            .and_then(|n| char::from_digit(n, 10))
            .ok_or_else(|| {
                D::Error::custom(format!("key binding must be a single character, got {n}"))
            }),
    }
}

impl ControlsSettings {
    pub fn keys(&self) -> [char; 4] {
        [self.play_pause, self.next, self.previous, self.quit]
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter directive used when `RUST_LOG` is not set, e.g. `info` or `nowplaying=debug`.
    pub level: String,
    /// Log file path. Defaults to `$XDG_STATE_HOME/nowplaying/nowplaying.log`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
