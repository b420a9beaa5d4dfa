//! Controlled search field.
//!
//! Holds no state of its own: [`apply_key`] maps the current text and a key
//! press to the next text, and [`SearchInput`] renders whatever it is given.

use crate::ui::theme::{ACCENT, DIM_TEXT, GLOBAL_BORDER, HEADER_TEXT};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const PLACEHOLDER: &str = "Search through thousands of movies";

/// Next text after `key`, or `None` when the key does not edit the text.
pub fn apply_key(text: &str, key: KeyEvent) -> Option<String> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    match key.code {
        KeyCode::Char('u') if ctrl => (!text.is_empty()).then(String::new),
        KeyCode::Char('w') if ctrl => {
            if text.is_empty() {
                return None;
            }
            let trimmed = text.trim_end();
            let cut = trimmed.rfind(' ').map(|i| i + 1).unwrap_or(0);
            Some(trimmed[..cut].to_string())
        }
        KeyCode::Char(ch) if !ctrl && !alt => {
            let mut next = text.to_string();
            next.push(ch);
            Some(next)
        }
        KeyCode::Backspace => {
            let mut next = text.to_string();
            next.pop().map(|_| next)
        }
        _ => None,
    }
}

pub struct SearchInput<'a> {
    text: &'a str,
}

impl<'a> SearchInput<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    pub fn widget(&self) -> Paragraph<'a> {
        let line = if self.text.is_empty() {
            Line::from(vec![
                Span::styled(" 🔍 ", Style::default().fg(ACCENT)),
                Span::styled(PLACEHOLDER, Style::default().fg(DIM_TEXT)),
            ])
        } else {
            Line::from(vec![
                Span::styled(" 🔍 ", Style::default().fg(ACCENT)),
                Span::styled(self.text, Style::default().fg(HEADER_TEXT)),
            ])
        };
        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }

    /// Terminal cursor position at the end of the text inside `area`.
    pub fn cursor(&self, area: Rect) -> (u16, u16) {
        // border + " 🔍 " (the emoji is two cells wide)
        let prefix = 1 + 4;
        let typed = u16::try_from(Span::raw(self.text).width()).unwrap_or(u16::MAX);
        let max_x = area.x.saturating_add(area.width.saturating_sub(2));
        let x = area.x.saturating_add(prefix).saturating_add(typed);
        (x.min(max_x), area.y.saturating_add(1))
    }
}
