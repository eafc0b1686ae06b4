use chrono::Local;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::Status;

use super::super::app::App;

/// Render the side panel: a summary of today's list. A close affordance is
/// always visible while the panel is open.
pub fn render_side_panel(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::LEFT)
        .border_style(Style::default().fg(app.theme.dim))
        .style(Style::default().bg(app.theme.background));

    let dim = Style::default().fg(app.theme.dim).bg(app.theme.background);
    let text = Style::default().fg(app.theme.text).bg(app.theme.background);
    let bright = Style::default()
        .fg(app.theme.text_bright)
        .bg(app.theme.background);

    let count = |status: Status| {
        app.engine
            .snapshot()
            .iter()
            .filter(|i| i.status == status)
            .count()
    };

    let lines = vec![
        Line::from(Span::styled(
            format!(" {} ", Local::now().format("%A, %B %e")),
            bright,
        )),
        Line::default(),
        Line::from(vec![
            Span::styled(" pending      ", dim),
            Span::styled(count(Status::Pending).to_string(), text),
        ]),
        Line::from(vec![
            Span::styled(" in progress  ", dim),
            Span::styled(count(Status::InProgress).to_string(), text),
        ]),
        Line::from(vec![
            Span::styled(" completed    ", dim),
            Span::styled(count(Status::Completed).to_string(), text),
        ]),
        Line::from(vec![
            Span::styled(" planning     ", dim),
            Span::styled(count(Status::Planning).to_string(), text),
        ]),
        Line::default(),
        Line::from(Span::styled(" p close", dim)),
    ];

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
