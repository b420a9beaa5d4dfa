use ratatui::layout::{Constraint, Direction, Layout, Rect};

const HEADER_HEIGHT: u16 = 3;
const SEARCH_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub search: Rect,
    /// Present only when the trending section has rows to show.
    pub trending: Option<Rect>,
    pub results: Rect,
    pub footer: Rect,
}

/// Split the screen top to bottom. `trending_rows == 0` hides the section.
pub fn layout_regions(area: Rect, trending_rows: u16) -> Regions {
    let trending_height = if trending_rows == 0 {
        0
    } else {
        trending_rows.saturating_add(2)
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(SEARCH_HEIGHT),
            Constraint::Length(trending_height),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    Regions {
        header: chunks[0],
        search: chunks[1],
        trending: (trending_height > 0).then_some(chunks[2]),
        results: chunks[3],
        footer: chunks[4],
    }
}
