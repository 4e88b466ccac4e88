use crate::ui::app::App;
use crate::ui::auth::{AuthIntent, AuthMode};
use crate::ui::session::View;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 'l') && app.session().is_logged_in() {
        app.logout();
        return;
    }

    match app.session().current_view {
        View::Home => handle_home_key(app, key),
        View::Auth => handle_auth_key(app, key),
        View::Builder => handle_builder_key(app, key),
    }
}

/// Bracketed paste goes to whatever input has focus.
pub fn handle_paste(app: &mut App, text: &str) {
    match app.session().current_view {
        View::Auth => app.dispatch_auth(AuthIntent::Paste(text.to_string())),
        View::Builder => app.insert_text(text),
        View::Home => {}
    }
}

fn handle_home_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.handle_start(),
        KeyCode::Char('l') if is_plain(key) => app.show_auth(AuthMode::Login),
        KeyCode::Char('s') if is_plain(key) => app.show_auth(AuthMode::Signup),
        KeyCode::Char('b') if is_plain(key) => app.navigate_to(View::Builder),
        _ => {}
    }
}

fn handle_auth_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 't') {
        app.dispatch_auth(AuthIntent::ToggleMode);
        return;
    }
    match key.code {
        KeyCode::Esc => app.navigate_to(View::Home),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.dispatch_auth(AuthIntent::FocusNext)
        }
        KeyCode::Enter => app.submit_auth(),
        KeyCode::Backspace => app.dispatch_auth(AuthIntent::Backspace),
        KeyCode::Char(ch) if is_plain(key) => app.dispatch_auth(AuthIntent::Input(ch)),
        _ => {}
    }
}

fn handle_builder_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'e') {
        app.generate_export();
        return;
    }
    if is_ctrl_char(key, 'r') {
        app.reset_form();
        return;
    }
    if is_ctrl_char(key, 'd') {
        app.remove_focused();
        return;
    }

    match key.code {
        KeyCode::Esc => app.navigate_to(View::Home),
        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev(),
        KeyCode::Enter => app.activate(),
        KeyCode::Delete => app.remove_focused(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(ch) if is_plain(key) => {
            let mut buf = [0u8; 4];
            app.insert_text(ch.encode_utf8(&mut buf));
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

/// Printable input: no modifier other than Shift.
fn is_plain(key: KeyEvent) -> bool {
    !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}
