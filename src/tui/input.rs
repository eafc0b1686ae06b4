use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::engine::{Decision, Overlay};
use crate::model::Direction;
use crate::util::unicode::prev_grapheme_boundary;

use super::app::App;

/// Handle a key event.
///
/// Precedence mirrors input ownership: the fast-entry field first, then an
/// open overlay, then the four routed commands, then chrome keys. A bound
/// key that reaches the router while something else owns input is
/// swallowed there, so no shortcut ever fires into an overlay or a text
/// field.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    app.clear_stale_notice();

    if app.engine.text_entry_focused() {
        handle_fast_entry(app, key);
        return;
    }

    if app.engine.overlay() != &Overlay::Closed {
        handle_overlay(app, key);
        return;
    }

    // The four routed commands (plain letters, no ctrl/alt)
    if let KeyCode::Char(c) = key.code
        && !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        match app.engine.route_key(c) {
            Decision::Dispatch(command) => {
                app.engine.dispatch(command);
                return;
            }
            Decision::Swallowed => return,
            Decision::Unbound => {}
        }
    }

    handle_chrome(app, key);
}

/// Keys while the fast-entry field owns input.
fn handle_fast_entry(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.entry_buffer.clear();
            app.engine.set_text_entry(false);
        }
        KeyCode::Enter => {
            app.submit_fast_entry();
        }
        KeyCode::Backspace => {
            if let Some(boundary) = prev_grapheme_boundary(&app.entry_buffer, app.entry_buffer.len())
            {
                app.entry_buffer.truncate(boundary);
            }
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.entry_buffer.push(c);
        }
        _ => {}
    }
}

/// Keys while a detail or modal overlay owns input. The overlay's close
/// affordance maps to Esc; everything else except the detail→modal
/// escalation is swallowed.
fn handle_overlay(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.engine.close_overlay(),
        KeyCode::Char('m') => {
            if matches!(app.engine.overlay(), Overlay::Detail(_)) {
                app.engine.escalate_detail_to_modal();
            }
        }
        _ => {}
    }
}

/// Keys outside the four routed commands, live only while the list owns
/// input.
fn handle_chrome(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('p') => app.engine.toggle_side_panel(),
        KeyCode::Char('x') => app.engine.toggle_select_focused(),
        KeyCode::Char('c') => app.engine.clear_selection(),
        KeyCode::Char('d') => app.delete_focused(),
        KeyCode::Char(' ') => app.cycle_focused_status(),
        KeyCode::Char('m') => {
            if let Some(id) = app.engine.focused().cloned() {
                app.engine.invoke(crate::engine::ItemAction::OpenModal(id));
            }
        }
        KeyCode::Char(']') => app.move_focused(Direction::Next),
        KeyCode::Char('[') => app.move_focused(Direction::Previous),
        KeyCode::Down => app.engine.dispatch(crate::engine::Command::FocusNext),
        KeyCode::Up => app.engine.dispatch(crate::engine::Command::FocusPrevious),
        KeyCode::Esc => {
            if app.engine.side_panel_open() {
                app.engine.toggle_side_panel();
            } else {
                app.engine.clear_selection();
            }
        }
        _ => {}
    }
}
