use crate::ui::app::App;
use crate::ui::search_input::apply_key;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

const PAGE: isize = 5;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if matches!(key.code, KeyCode::Esc) || is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Up => app.scroll_by(-1),
        KeyCode::Down => app.scroll_by(1),
        KeyCode::PageUp => app.scroll_by(-PAGE),
        KeyCode::PageDown => app.scroll_by(PAGE),
        _ => {
            if let Some(text) = apply_key(app.search_text(), key) {
                app.set_search_text(text);
            }
        }
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn quit_keys() {
        for k in [
            key(KeyCode::Esc, KeyModifiers::NONE),
            key(KeyCode::Char('c'), KeyModifiers::CONTROL),
            key(KeyCode::Char('Q'), KeyModifiers::CONTROL),
        ] {
            let mut app = App::new(&Config::default());
            handle_key(&mut app, k);
            assert!(app.should_quit());
        }
    }

    #[test]
    fn plain_q_is_typed() {
        let mut app = App::new(&Config::default());
        handle_key(&mut app, key(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(!app.should_quit());
        assert_eq!(app.search_text(), "q");
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = App::new(&Config::default());
        let mut release = key(KeyCode::Char('a'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        handle_key(&mut app, release);
        assert_eq!(app.search_text(), "");
    }

    #[test]
    fn typing_and_backspace_edit_search_text() {
        let mut app = App::new(&Config::default());
        for ch in "heat".chars() {
            handle_key(&mut app, key(KeyCode::Char(ch), KeyModifiers::NONE));
        }
        handle_key(&mut app, key(KeyCode::Backspace, KeyModifiers::NONE));
        assert_eq!(app.search_text(), "hea");
    }

    #[test]
    fn arrows_scroll_instead_of_typing() {
        let mut app = App::new(&Config::default());
        handle_key(&mut app, key(KeyCode::Down, KeyModifiers::NONE));
        assert_eq!(app.search_text(), "");
        assert_eq!(app.scroll(), 0);
    }
}
