use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str = " Type: Search │ Ctrl+U: Clear │ ↑/↓ PgUp/PgDn: Scroll │ Esc: Quit";

/// Bottom bar: key hints on the left, worker status and version on the right.
#[derive(Default)]
pub struct Footer<'a> {
    status: Option<&'a str>,
}

impl<'a> Footer<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Worker problem to surface next to the version (busy, stopped, ...).
    pub fn with_status(mut self, status: Option<&'a str>) -> Self {
        self.status = status;
        self
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let mut right = Vec::new();
        if let Some(status) = self.status {
            right.push(Span::styled(
                format!("⚠ {status} │ "),
                Style::default().fg(STATUS_ERROR),
            ));
        }
        right.push(Span::styled(format!("marquee v{VERSION} "), text_style));

        let right_width: usize = right.iter().map(Span::width).sum();
        let content_width = area.width.saturating_sub(2) as usize;
        let hints_width = Span::raw(HINTS).width();
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(right_width);

        let mut spans = vec![
            Span::styled(HINTS, text_style),
            Span::styled(" ".repeat(padding), text_style),
        ];
        spans.extend(right);

        Paragraph::new(Line::from(spans)).style(text_style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
