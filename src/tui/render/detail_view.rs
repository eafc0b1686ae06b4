use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::model::ItemId;

use super::super::app::App;
use super::centered_rect;

/// Render the detail overlay for one item.
///
/// The coordinator never validates targets against the snapshot, so the
/// item may have been deleted out from under an open overlay (e.g. by an
/// external store edit); render a tombstone rather than stale fields.
pub fn render_detail(frame: &mut Frame, app: &App, id: &ItemId, area: Rect) {
    let popup = centered_rect(60, 12, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.accent))
        .style(Style::default().bg(app.theme.background))
        .title(" detail ");

    let dim = Style::default().fg(app.theme.dim).bg(app.theme.background);
    let text = Style::default().fg(app.theme.text).bg(app.theme.background);
    let bright = Style::default()
        .fg(app.theme.text_bright)
        .bg(app.theme.background);

    let mut lines: Vec<Line> = Vec::new();
    match app.engine.snapshot().get(id) {
        Some(item) => {
            lines.push(Line::from(Span::styled(item.title.clone(), bright)));
            lines.push(Line::default());
            lines.push(Line::from(vec![
                Span::styled("id      ", dim),
                Span::styled(item.id.to_string(), text),
            ]));
            lines.push(Line::from(vec![
                Span::styled("status  ", dim),
                Span::styled(item.status.to_string(), text),
            ]));
            lines.push(Line::from(vec![
                Span::styled("created ", dim),
                Span::styled(item.created_at.format("%Y-%m-%d %H:%M").to_string(), text),
            ]));
            if let Some(note) = &item.note {
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(note.clone(), text)));
            }
        }
        None => {
            lines.push(Line::from(Span::styled(
                format!("{id} no longer exists"),
                dim,
            )));
        }
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Esc close · m actions", dim)));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, popup);
}
