use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::util::unicode::truncate_to_width;

use super::super::app::App;

/// Render the task list from the engine's current view records.
pub fn render_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let visible_height = area.height as usize;
    app.ensure_focus_visible(visible_height);

    if app.engine.view().is_empty() {
        let hint = format!(" nothing for today — press {} to add", fast_entry_key(app));
        let empty =
            Paragraph::new(hint).style(Style::default().fg(app.theme.dim).bg(app.theme.background));
        frame.render_widget(empty, area);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for record in app
        .engine
        .view()
        .iter()
        .skip(app.scroll_offset)
        .take(visible_height)
    {
        let row_bg = if record.is_selected {
            app.theme.selection_bg
        } else {
            bg
        };

        let marker = if record.is_focused { "\u{258C}" } else { " " };
        let select_mark = if record.is_selected { "*" } else { " " };
        let title_style = if record.is_focused {
            Style::default().fg(app.theme.text_bright).bg(row_bg)
        } else {
            Style::default().fg(app.theme.text).bg(row_bg)
        };

        let title_budget = (area.width as usize).saturating_sub(8);
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(app.theme.focused).bg(row_bg)),
            Span::styled(select_mark, Style::default().fg(app.theme.accent).bg(row_bg)),
            Span::styled(
                format!("[{}] ", record.glyph),
                Style::default().fg(app.theme.dim).bg(row_bg),
            ),
            Span::styled(truncate_to_width(&record.title, title_budget), title_style),
        ]));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn fast_entry_key(app: &App) -> char {
    app.engine.keys().fast_entry
}
