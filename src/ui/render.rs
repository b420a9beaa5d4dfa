use crate::ui::app::App;
use crate::ui::cards::{movie_card, trending_line, CARD_HEIGHT};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::search::RequestState;
use crate::ui::search_input::SearchInput;
use crate::ui::theme::{ACCENT, DIM_TEXT, GLOBAL_BORDER, STATUS_ERROR};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let trending_rows = app.trending().entries().len() as u16;
    let regions = layout_regions(area, trending_rows);

    frame.render_widget(Header::new().widget(), regions.header);

    let input = SearchInput::new(app.search_text());
    frame.render_widget(input.widget(), regions.search);
    if regions.search.width > 2 && regions.search.height > 2 {
        frame.set_cursor_position(input.cursor(regions.search));
    }

    if let Some(trending_area) = regions.trending {
        draw_trending(frame, app, trending_area);
    }

    frame.render_widget(Clear, regions.results);
    draw_results(frame, app, regions.results);

    let footer = Footer::new().with_status(app.last_command_error());
    frame.render_widget(footer.widget(regions.footer), regions.footer);
}

fn section(title: &'static str) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            title,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

fn draw_trending(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .trending()
        .entries()
        .iter()
        .enumerate()
        .map(|(idx, entry)| trending_line(idx + 1, entry))
        .collect();
    frame.render_widget(Paragraph::new(lines).block(section(" Trending Movies ")), area);
}

fn draw_results(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let lines: Vec<Line> = match app.request() {
        RequestState::Idle => Vec::new(),
        RequestState::Loading => {
            let spinner = SPINNER_FRAMES[app.spinner_tick() % SPINNER_FRAMES.len()];
            vec![Line::from(vec![
                Span::styled(spinner, Style::default().fg(ACCENT)),
                Span::styled(" Loading movies...", Style::default().fg(DIM_TEXT)),
            ])]
        }
        RequestState::Error(message) => vec![Line::from(Span::styled(
            message.clone(),
            Style::default().fg(STATUS_ERROR),
        ))],
        RequestState::Success(movies) if movies.is_empty() => vec![Line::from(Span::styled(
            "No movies found",
            Style::default().fg(DIM_TEXT),
        ))],
        RequestState::Success(movies) => {
            let visible_cards = (area.height as usize / CARD_HEIGHT).max(1);
            movies
                .iter()
                .skip(app.scroll())
                .take(visible_cards)
                .flat_map(|movie| movie_card(movie, app.image_base_url()))
                .collect()
        }
    };

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(section(" All Movies "));
    frame.render_widget(widget, area);
}
