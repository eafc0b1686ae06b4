use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::model::ItemId;

use super::super::app::App;
use super::centered_rect;

/// Render the secondary modal for one item.
pub fn render_modal(frame: &mut Frame, app: &App, id: &ItemId, area: Rect) {
    let popup = centered_rect(44, 8, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.focused))
        .style(Style::default().bg(app.theme.background))
        .title(" actions ");

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
                Span::styled("status  ", dim),
                Span::styled(item.status.to_string(), text),
            ]));
            if app.engine.selection().is_selected(id) {
                lines.push(Line::from(Span::styled(
                    format!("one of {} selected", app.engine.selection().len()),
                    dim,
                )));
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
    lines.push(Line::from(Span::styled("Esc close", dim)));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, popup);
}
