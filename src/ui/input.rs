use crate::ui::app::{App, CursorMove};
use crate::ui::settings::SettingsIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.settings_dialog().is_visible() {
        handle_settings_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(CursorMove::Up),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(CursorMove::Down),
        KeyCode::Left | KeyCode::Char('h') => app.move_cursor(CursorMove::Left),
        KeyCode::Right | KeyCode::Char('l') => app.move_cursor(CursorMove::Right),
        KeyCode::Enter | KeyCode::Char(' ') => app.flip_at_cursor(),
        KeyCode::Char('r') => app.restart(),
        KeyCode::Char('s') => app.open_settings(),
        KeyCode::Char('d') => app.toggle_dark_mode(),
        _ => {}
    }
}

fn handle_settings_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.dispatch_settings(SettingsIntent::RequestClose),
        KeyCode::Enter => app.apply_settings(),
        KeyCode::Up => app.dispatch_settings(SettingsIntent::MoveUp),
        KeyCode::Down => app.dispatch_settings(SettingsIntent::MoveDown),
        KeyCode::Left | KeyCode::Char('-') => app.dispatch_settings(SettingsIntent::Decrease),
        KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => {
            app.dispatch_settings(SettingsIntent::Increase)
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
