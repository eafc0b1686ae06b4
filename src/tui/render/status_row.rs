use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Status;

use super::super::app::App;

/// Render the status row (bottom of screen): counts on the left, the
/// transient notice or key hints on the right.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let total = app.engine.view().len();
    let done = app
        .engine
        .snapshot()
        .iter()
        .filter(|i| i.status == Status::Completed)
        .count();
    let selected = app.engine.selection().len();

    let mut left = format!(" {total} items · {done} done");
    if selected > 0 {
        left.push_str(&format!(" · {selected} selected"));
    }

    let mut spans = vec![Span::styled(
        left.clone(),
        Style::default().fg(app.theme.dim).bg(bg),
    )];

    let (right, right_style) = match &app.notice {
        Some(notice) => (
            notice.clone(),
            Style::default().fg(app.theme.error).bg(bg),
        ),
        None => {
            let keys = app.engine.keys();
            (
                format!(
                    "{} new · {} edit · {}/{} move · q quit ",
                    keys.fast_entry, keys.edit, keys.next, keys.previous
                ),
                Style::default().fg(app.theme.dim).bg(bg),
            )
        }
    };

    let left_width = left.chars().count();
    let right_width = right.chars().count();
    if left_width + right_width < width {
        let padding = width - left_width - right_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(right, right_style));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
