//! UI rendering helpers for the terminal user interface.
//!
//! The screen is split into a title strip, the centered song panel and the
//! controls footer. Rendering uses `ratatui` and is driven by `App` state.

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;
use crate::config::UiSettings;
use crate::format::{EMPTY_CELL, FILLED_CELL, progress_bar, progress_filled, progress_time};
use crate::keymap::Keymap;
use crate::song::{NowPlaying, SongInfo};

const PADDING: &str = "    ";
const FOOTER_HEIGHT: u16 = 5;

fn accent() -> Style {
    Style::default().fg(Color::Green)
}

/// A labelled field. Values too long for the panel continue on rows
/// indented to line up under the first character of the value.
fn label_lines(label: &'static str, value: &str, panel_width: u16) -> Vec<Line<'static>> {
    let indent = PADDING.len() + label.len() + 1;
    let room = usize::from(panel_width).saturating_sub(indent).max(1);
    let chars: Vec<char> = value.chars().collect();
    let mut chunks = chars.chunks(room).map(|c| c.iter().collect::<String>());

    let mut lines = vec![Line::from(vec![
        Span::raw(PADDING),
        Span::styled(label, accent()),
        Span::raw(" "),
        Span::raw(chunks.next().unwrap_or_default()),
    ])];
    lines.extend(
        chunks.map(|rest| Line::from(vec![Span::raw(" ".repeat(indent)), Span::raw(rest)])),
    );
    lines
}

/// Progress bar with filled cells in green and the rest in white, followed
/// by `MM:SS/MM:SS`.
pub fn progress_line(song: &SongInfo, width: usize) -> Line<'static> {
    let filled = progress_filled(song.position, song.length, width);
    Line::from(vec![
        Span::raw(PADDING),
        Span::raw("["),
        Span::styled(FILLED_CELL.to_string().repeat(filled), accent()),
        Span::styled(
            EMPTY_CELL.to_string().repeat(width - filled),
            Style::default().fg(Color::White),
        ),
        Span::raw("]"),
        Span::raw(" "),
        Span::raw(progress_time(song.position, song.length)),
    ])
}

/// Lines of the song panel for the current state.
pub fn song_lines(now_playing: &NowPlaying, ui: &UiSettings) -> Vec<Line<'static>> {
    let NowPlaying::Song(song) = now_playing else {
        return vec![Line::raw(now_playing.message().unwrap_or_default())];
    };

    let mut lines = vec![Line::raw("")];
    lines.extend(label_lines("Title: ", &song.title, ui.panel_width));
    lines.extend(label_lines("Artist:", &song.artist, ui.panel_width));
    lines.extend(label_lines("Album: ", &song.album, ui.panel_width));
    lines.extend(label_lines("Status:", &song.status.to_string(), ui.panel_width));
    lines.push(Line::raw(""));
    lines.push(progress_line(song, ui.progress_width));
    lines
}

/// The song panel as unstyled text, for printing outside the TUI.
pub fn plain_text(now_playing: &NowPlaying, ui: &UiSettings) -> String {
    let NowPlaying::Song(song) = now_playing else {
        return now_playing.message().unwrap_or_default();
    };

    format!(
        "Title:  {}\nArtist: {}\nAlbum:  {}\nStatus: {}\n{} {}",
        song.title,
        song.artist,
        song.album,
        song.status,
        progress_bar(song.position, song.length, ui.progress_width),
        progress_time(song.position, song.length),
    )
}

/// Render the entire UI into the provided `frame`.
pub fn draw(frame: &mut Frame, app: &App, keymap: &Keymap, ui: &UiSettings) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Fill(4),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(frame.area());

    // Title strip
    let borders = if ui.border { Borders::ALL } else { Borders::NONE };
    let header = Block::default()
        .borders(borders)
        .border_style(accent())
        .title(ui.window_title.as_str())
        .title_style(accent())
        .title_alignment(Alignment::Center);
    frame.render_widget(header, rows[0]);

    // Song panel, centered horizontally
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(ui.panel_width),
            Constraint::Fill(1),
        ])
        .split(rows[1]);
    let song = Paragraph::new(song_lines(&app.now_playing, ui)).wrap(Wrap { trim: false });
    frame.render_widget(song, cols[1]);

    // Footer: optional status message above the help line
    let status = match app.status_text(Instant::now()) {
        Some(text) => Line::styled(text.to_string(), Style::default().fg(Color::Red)),
        None => Line::raw(""),
    };
    let footer = Paragraph::new(vec![status, keymap.help_line()]).alignment(Alignment::Center);
    frame.render_widget(footer, rows[2]);
}
