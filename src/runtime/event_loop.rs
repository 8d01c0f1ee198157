use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::debug;

use crate::app::App;
use crate::config;
use crate::keymap::Keymap;
use crate::poller::{PollUpdate, Poller, PollerCmd};
use crate::ui;

const INPUT_POLL: Duration = Duration::from_millis(50);

/// Main terminal event loop: applies poll results, draws, and dispatches
/// key presses. Returns `Ok(())` when the user quits.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    keymap: &Keymap,
    app: &mut App,
    poller: &Poller,
    updates: &Receiver<PollUpdate>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        loop {
            match updates.try_recv() {
                Ok(update) => app.apply(update),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    return Err("poller thread exited unexpectedly".into());
                }
            }
        }

        app.expire_status(Instant::now());
        terminal.draw(|f| ui::draw(f, app, keymap, &settings.ui))?;

        if event::poll(INPUT_POLL)? {
            if let Some(cmd) = dispatch_event(event::read()?, keymap, app) {
                poller.send(cmd)?;
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Resolve a terminal event into a command for the poller, if any.
/// A resize asks for fresh data so the new layout is filled right away.
fn dispatch_event(event: Event, keymap: &Keymap, app: &mut App) -> Option<PollerCmd> {
    match event {
        Event::Key(key) => dispatch_key(key, keymap, app),
        Event::Resize(..) => Some(PollerCmd::Refresh),
        _ => None,
    }
}

fn dispatch_key(key: KeyEvent, keymap: &Keymap, app: &mut App) -> Option<PollerCmd> {
    let action = keymap.action_for(key)?;
    debug!(?action, "key action");
    app.handle_action(action)
}
