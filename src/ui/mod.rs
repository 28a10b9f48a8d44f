// UI module for rendering the TUI.
// Lays out the header, delete banner, listings area, and status bar.

mod list;
mod modal;

use ratatui::{prelude::*, widgets::*};

use crate::app::App;
use crate::state::ViewPhase;

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let banner = app.view.banner();
    let banner_height = if banner.is_some() { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(banner_height), // Delete error banner
            Constraint::Length(2),             // Header
            Constraint::Min(1),                // Listings
            Constraint::Length(1),             // Status bar
        ])
        .split(frame.area());

    if let Some(message) = banner {
        draw_banner(frame, message, chunks[0]);
    }

    draw_header(frame, app, chunks[1]);
    list::render_listings(frame, &mut app.view, chunks[2]);
    draw_status_bar(frame, app, chunks[3]);

    // Dialog rendered last, on top of everything
    if app.view.form.is_visible() {
        modal::draw_create_form(frame, &app.view.form);
    }
}

/// Draw the delete failure banner.
fn draw_banner(frame: &mut Frame, message: &str, area: Rect) {
    let banner = Paragraph::new(format!("❌ {}", message))
        .style(Style::default().fg(Color::Red))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );
    frame.render_widget(banner, area);
}

/// Draw the view heading.
fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        app.title.as_str(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    if app.view.is_busy() {
        spans.push(Span::styled(
            "  ⏳ working...",
            Style::default().fg(Color::Yellow),
        ));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(header, area);
}

/// Draw the status bar with key hints and sync info.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));
    let hint = |h: &'static str| Span::styled(h, Style::default().fg(Color::DarkGray));

    let mut spans = match app.view.phase() {
        ViewPhase::Ready => vec![
            key(" ↑↓"),
            hint(" select  "),
            key("d"),
            hint(" Delete  "),
            key("a"),
            hint(" Add  "),
            Span::styled("x", Style::default().fg(Color::Red)),
            hint(" Delete  "),
            key("r"),
            hint(" reload  "),
            key("q"),
            hint(" quit"),
        ],
        ViewPhase::Loading | ViewPhase::Error => vec![
            key(" r"),
            hint(" reload  "),
            key("q"),
            hint(" quit"),
        ],
    };

    if let Some(err) = app.view.refetch_error() {
        spans.push(Span::styled(
            format!("  refresh failed: {}", err.reason()),
            Style::default().fg(Color::Red),
        ));
    } else if let Some(synced_at) = app.view.query.synced_at() {
        spans.push(hint("  synced "));
        spans.push(Span::styled(
            list::format_relative_time(&synced_at),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
