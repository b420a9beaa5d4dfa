//! Text cards for movies and trending entries.

use crate::catalog::Movie;
use crate::trending::TrendingEntry;
use crate::ui::theme::{ACCENT, DIM_TEXT, HEADER_SEPARATOR, HEADER_TEXT, RATING};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Lines per movie card, including the blank spacer.
pub const CARD_HEIGHT: usize = 4;

const MISSING: &str = "N/A";

pub fn movie_card(movie: &Movie, image_base_url: &str) -> Vec<Line<'static>> {
    let separator = Span::styled(" • ", Style::default().fg(HEADER_SEPARATOR));
    let rating = movie
        .vote_average
        .map(|vote| format!("{vote:.1}"))
        .unwrap_or_else(|| MISSING.to_string());
    let language = movie
        .original_language
        .clone()
        .unwrap_or_else(|| MISSING.to_string());
    let year = movie.release_year().unwrap_or(MISSING).to_string();
    let poster = movie
        .poster_url(image_base_url)
        .unwrap_or_else(|| "no poster".to_string());

    vec![
        Line::from(Span::styled(
            movie.title.clone(),
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("★ ", Style::default().fg(RATING)),
            Span::styled(rating, Style::default().fg(HEADER_TEXT)),
            separator.clone(),
            Span::styled(language, Style::default().fg(DIM_TEXT)),
            separator,
            Span::styled(year, Style::default().fg(DIM_TEXT)),
        ]),
        Line::from(Span::styled(poster, Style::default().fg(HEADER_SEPARATOR))),
        Line::default(),
    ]
}

/// One line per trending entry; `rank` is 1-based.
pub fn trending_line(rank: usize, entry: &TrendingEntry) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            format!("{rank:>2}. "),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(entry.title.clone(), Style::default().fg(HEADER_TEXT)),
    ];
    if let Some(url) = &entry.poster_url {
        spans.push(Span::styled("  ", Style::default()));
        spans.push(Span::styled(url.clone(), Style::default().fg(HEADER_SEPARATOR)));
    }
    Line::from(spans)
}
