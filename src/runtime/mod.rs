use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::app::App;
use crate::cli::Args;
use crate::keymap::Keymap;
use crate::logging;
use crate::playerctl::Playerctl;
use crate::poller::Poller;
use crate::song::NowPlaying;
use crate::ui;

mod event_loop;
mod settings;

pub fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let (settings, warnings) = settings::load_settings(&args);
    // Printed before the alternate screen, so they are still there on exit.
    for w in &warnings {
        eprintln!("nowplaying: {w}");
    }

    if args.dump_config {
        print!("{}", settings.to_toml()?);
        return Ok(());
    }

    if args.once {
        let playerctl = Playerctl::from_settings(&settings.player);
        let now_playing = playerctl
            .song_info(settings.ui.field_widths())
            .unwrap_or_else(|e| NowPlaying::Error(e.to_string()));
        println!("{}", ui::plain_text(&now_playing, &settings.ui));
        return Ok(());
    }

    let log_file = logging::init(args.log_file.as_deref(), &settings.logging);
    for w in &warnings {
        warn!("{w}");
    }
    info!(log_file = ?log_file, player = ?settings.player.name, "starting");

    let playerctl = Playerctl::from_settings(&settings.player);
    let (mut poller, updates) = Poller::spawn(
        playerctl,
        settings.ui.field_widths(),
        Duration::from_millis(settings.poll.interval_ms),
    )?;

    let keymap = Keymap::from_settings(&settings.controls);
    let mut app = App::new(Duration::from_millis(settings.ui.status_timeout_ms));

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result =
        event_loop::run(&mut terminal, &settings, &keymap, &mut app, &poller, &updates);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    poller.stop();
    match &run_result {
        Ok(()) => info!("shutting down"),
        Err(e) => warn!(error = %e, "event loop failed"),
    }

    run_result
}
