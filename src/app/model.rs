//! Application model: `App` and its transient status message.

use std::time::{Duration, Instant};

use crate::keymap::Action;
use crate::playerctl::PlayerCommand;
use crate::poller::{PollUpdate, PollerCmd};
use crate::song::NowPlaying;

/// A short-lived message shown above the controls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub expires_at: Instant,
}

/// The main application model.
pub struct App {
    pub now_playing: NowPlaying,
    pub status: Option<StatusMessage>,
    pub should_quit: bool,
    status_timeout: Duration,
}

impl App {
    pub fn new(status_timeout: Duration) -> Self {
        Self {
            now_playing: NowPlaying::Loading,
            status: None,
            should_quit: false,
            status_timeout,
        }
    }

    pub fn apply(&mut self, update: PollUpdate) {
        self.apply_at(update, Instant::now());
    }

    pub fn apply_at(&mut self, update: PollUpdate, now: Instant) {
        match update {
            PollUpdate::NowPlaying(np) => self.now_playing = np,
            PollUpdate::ControlFailed { command, message } => {
                self.status = Some(StatusMessage {
                    text: format!("Error occurred ({command}): {message}"),
                    expires_at: now + self.status_timeout,
                });
            }
        }
    }

    /// Turn a key action into a poller command. Quitting is handled here.
    pub fn handle_action(&mut self, action: Action) -> Option<PollerCmd> {
        let command = match action {
            Action::Quit => {
                self.should_quit = true;
                return None;
            }
            Action::PlayPause => PlayerCommand::PlayPause,
            Action::Next => PlayerCommand::Next,
            Action::Previous => PlayerCommand::Previous,
        };
        Some(PollerCmd::Control(command))
    }

    /// The status message, if it has not expired at `now`.
    pub fn status_text(&self, now: Instant) -> Option<&str> {
        self.status
            .as_ref()
            .filter(|s| now < s.expires_at)
            .map(|s| s.text.as_str())
    }

    /// Drop an expired status message.
    pub fn expire_status(&mut self, now: Instant) {
        if self.status.as_ref().is_some_and(|s| now >= s.expires_at) {
            self.status = None;
        }
    }
}
