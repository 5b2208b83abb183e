use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

pub fn handle_key(key: KeyEvent, app: &mut App) {
    // Ctrl-C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.is_running = false;
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.is_running = false;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.select_next();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.select_prev();
        }
        _ => {}
    }
}

/// Hover routing: the pointer entering a badge hitbox shows the tooltip for
/// that row, leaving every hitbox hides it.
pub fn handle_mouse(mouse: MouseEvent, app: &mut App) {
    if !matches!(mouse.kind, MouseEventKind::Moved) {
        return;
    }

    let pos = Position::new(mouse.column, mouse.row);
    let hovered = app
        .badge_hitboxes
        .iter()
        .position(|hitbox| hitbox.is_some_and(|rect| rect.contains(pos)));

    match hovered {
        Some(row) => {
            let message = app.full_recipient_list(row);
            app.tooltip.pointer_enter(message);
        }
        None => app.tooltip.pointer_leave(),
    }
}
