use crate::engine::SwipeDirection;
use crate::ui::app::{App, Screen};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    // Banner takes key priority while visible: Esc dismisses, Tab jumps
    // straight to the matches screen.
    if app.banner().is_visible() {
        match key.code {
            KeyCode::Esc => {
                app.dismiss_banner();
                return;
            }
            KeyCode::Tab => {
                app.dismiss_banner();
                if app.screen() != Screen::Matches {
                    app.next_screen();
                }
                return;
            }
            _ => {}
        }
    }

    match key.code {
        KeyCode::Char('q') => {
            app.request_quit();
            return;
        }
        KeyCode::Tab => {
            app.next_screen();
            return;
        }
        _ => {}
    }

    match app.screen() {
        Screen::Discover => handle_discover_key(app, key),
        Screen::Matches => handle_matches_key(app, key),
    }
}

fn handle_discover_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => app.swipe(SwipeDirection::Left),
        KeyCode::Right | KeyCode::Char('l') => app.swipe(SwipeDirection::Right),
        KeyCode::Up | KeyCode::Char('s') => app.swipe(SwipeDirection::Up),
        KeyCode::Char('u') => app.undo(),
        KeyCode::Char('r') => app.reset_session(),
        _ => {}
    }
}

fn handle_matches_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.scroll_matches_up(),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_matches_down(),
        KeyCode::Char('f') | KeyCode::Left | KeyCode::Right => app.cycle_match_filter(),
        KeyCode::Esc => app.next_screen(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
