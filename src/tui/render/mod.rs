pub mod detail_view;
pub mod list_view;
pub mod modal_view;
pub mod side_panel;
pub mod status_row;

use chrono::Local;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::engine::Overlay;

use super::app::App;

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: title row | content | fast-entry row (when active) | status row
    let entry_rows = if app.engine.text_entry_focused() { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(entry_rows),
            Constraint::Length(1),
        ])
        .split(area);

    render_title_row(frame, app, chunks[0]);

    // Content: list, with the side panel splitting off the right edge
    if app.engine.side_panel_open() && chunks[1].width > 40 {
        let content = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(32)])
            .split(chunks[1]);
        list_view::render_list(frame, app, content[0]);
        side_panel::render_side_panel(frame, app, content[1]);
    } else {
        list_view::render_list(frame, app, chunks[1]);
    }

    if app.engine.text_entry_focused() {
        render_fast_entry_row(frame, app, chunks[2]);
    }

    status_row::render_status_row(frame, app, chunks[3]);

    // Overlays on top of everything
    match app.engine.overlay().clone() {
        Overlay::Closed => {}
        Overlay::Detail(id) => detail_view::render_detail(frame, app, &id, area),
        Overlay::Modal(id) => modal_view::render_modal(frame, app, &id, area),
    }
}

fn render_title_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let today = Local::now().format("%a %b %e").to_string();
    let line = Line::from(vec![
        Span::styled(
            " daylist ",
            Style::default().fg(app.theme.text_bright).bg(bg),
        ),
        Span::styled(today, Style::default().fg(app.theme.dim).bg(bg)),
    ]);
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}

fn render_fast_entry_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let line = Line::from(vec![
        Span::styled(" + ", Style::default().fg(app.theme.accent).bg(bg)),
        Span::styled(
            app.entry_buffer.clone(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ),
        Span::styled("\u{258C}", Style::default().fg(app.theme.focused).bg(bg)),
        Span::styled(
            "  Enter add · Esc cancel",
            Style::default().fg(app.theme.dim).bg(bg),
        ),
    ]);
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}

/// A popup rectangle centered in `area`, clamped to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
