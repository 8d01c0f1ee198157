//! Keyboard bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::config::ControlsSettings;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    PlayPause,
    Next,
    Previous,
    Quit,
}

impl Action {
    pub fn label(self) -> &'static str {
        match self {
            Self::PlayPause => "Play/Pause",
            Self::Next => "Next",
            Self::Previous => "Previous",
            Self::Quit => "Quit",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Keymap {
    bindings: [(char, Action); 4],
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_settings(&ControlsSettings::default())
    }
}

impl Keymap {
    pub fn from_settings(controls: &ControlsSettings) -> Self {
        Self {
            bindings: [
                (controls.play_pause, Action::PlayPause),
                (controls.next, Action::Next),
                (controls.previous, Action::Previous),
                (controls.quit, Action::Quit),
            ],
        }
    }

    /// Map a key event to an action. Only presses count.
    pub fn action_for(&self, key: KeyEvent) -> Option<Action> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let KeyCode::Char(c) = key.code else {
            return None;
        };

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return matches!(c, 'c' | 'C').then_some(Action::Quit);
        }

        self.bindings
            .iter()
            .find(|(k, _)| *k == c)
            .map(|(_, action)| *action)
    }

    /// Footer text, e.g. `Play/Pause: p  Next: n  Previous: b  Quit: q`,
    /// with the keys highlighted.
    pub fn help_line(&self) -> Line<'static> {
        let key_style = Style::default().fg(Color::Green);
        let mut spans: Vec<Span<'static>> = Vec::with_capacity(self.bindings.len() * 3);

        for (i, (key, action)) in self.bindings.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::raw(format!("{}: ", action.label())));
            spans.push(Span::styled(key.to_string(), key_style));
        }

        Line::from(spans)
    }
}
