use chrono::Utc;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Gauge, Paragraph};
use ratatui::Frame;

use crate::catalog::Brand;
use crate::engine::SessionState;
use crate::matches::{relative_date, MatchFilter};
use crate::ui::app::{App, Screen};
use crate::ui::banner::MatchBannerState;
use crate::ui::card::BrandCard;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::runtime::TICK_MS;
use crate::ui::theme::{
    ACCENT, DIM_TEXT, GLOBAL_BORDER, HEADER_TEXT, LIKE_GREEN, PASS_RED, POPUP_BORDER,
};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let state = app.session().state();

    let header_widget = Header::new();
    frame.render_widget(
        header_widget.widget(app.screen(), state.position(), app.matches().len()),
        header,
    );

    frame.render_widget(Clear, body);
    match app.screen() {
        Screen::Discover => draw_discover(frame, state, body),
        Screen::Matches => draw_matches(frame, app, body),
    }

    let footer_widget = Footer::new();
    frame.render_widget(footer_widget.widget(app.screen(), footer), footer);

    if let MatchBannerState::Visible { brand, ticks_left } = app.banner() {
        draw_banner(frame, body, brand, *ticks_left);
    }
}

fn draw_discover(frame: &mut Frame<'_>, state: &SessionState, body: Rect) {
    let (cursor, total) = state.position();

    if total == 0 {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "No brands to show",
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Load a catalog with --catalog, or come back later.",
                Style::default().fg(DIM_TEXT),
            )),
        ];
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            body,
        );
        return;
    }

    let Some(current) = state.current() else {
        draw_exhausted(frame, state, body);
        return;
    };

    let regions = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(2),
        ])
        .split(body);

    // Progress: position, remaining badge, bar.
    let remaining = total - cursor - 1;
    let progress_line = Line::from(vec![
        Span::styled(format!(" {} / {}", cursor + 1, total), Style::default().fg(HEADER_TEXT)),
        Span::styled(
            format!("   {remaining} remaining"),
            Style::default().fg(DIM_TEXT),
        ),
    ]);
    let progress = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Length(1)])
        .split(regions[0]);
    frame.render_widget(Paragraph::new(progress_line), progress[0]);
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(ACCENT))
            .ratio((cursor + 1) as f64 / total as f64)
            .label(""),
        progress[1],
    );

    frame.render_widget(BrandCard::new(current).widget(), regions[1]);

    let hint = match state.peek_next() {
        Some(next) if state.history().is_empty() => {
            format!(" ← pass · → like · ↑ super-like   (up next: {})", next.name)
        }
        Some(next) => format!(" up next: {}", next.name),
        None => " last one in the deck".to_string(),
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hint,
            Style::default().fg(DIM_TEXT),
        ))),
        regions[2],
    );
}

fn draw_exhausted(frame: &mut Frame<'_>, state: &SessionState, body: Rect) {
    let stats = state.stats();
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "You've seen every brand!",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Come back later for new brands, or review your connections.",
            Style::default().fg(DIM_TEXT),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Viewed ", Style::default().fg(DIM_TEXT)),
            Span::styled(stats.viewed.to_string(), Style::default().fg(HEADER_TEXT)),
            Span::styled("   Liked ", Style::default().fg(DIM_TEXT)),
            Span::styled(stats.liked.to_string(), Style::default().fg(LIKE_GREEN)),
            Span::styled("   Passed ", Style::default().fg(DIM_TEXT)),
            Span::styled(stats.passed.to_string(), Style::default().fg(PASS_RED)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "r: start over │ Tab: view matches",
            Style::default().fg(DIM_TEXT),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), body);
}

fn draw_matches(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let now = Utc::now();
    let view = app.matches_view();
    let all_count = app.matches().filtered(MatchFilter::All, now).len();
    let recent_count = app.matches().filtered(MatchFilter::Recent, now).len();
    let visible = app.matches().filtered(view.filter, now);

    let regions = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(body);

    let tab_style = |filter: MatchFilter| {
        if filter == view.filter {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DIM_TEXT)
        }
    };
    let tabs = Line::from(vec![
        Span::styled(
            format!(" All ({all_count})"),
            tab_style(MatchFilter::All),
        ),
        Span::styled("  │  ", Style::default().fg(GLOBAL_BORDER)),
        Span::styled(
            format!("Recent ({recent_count})"),
            tab_style(MatchFilter::Recent),
        ),
    ]);
    frame.render_widget(Paragraph::new(tabs), regions[0]);

    if visible.is_empty() {
        let message = if app.matches().is_empty() {
            "No connections yet. Discover brands to make new ones."
        } else {
            "No connections match this filter."
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                message,
                Style::default().fg(DIM_TEXT),
            )))
            .alignment(Alignment::Center),
            regions[1],
        );
        return;
    }

    let rows_area = regions[1].height as usize;
    let offset = view.scroll_offset.min(visible.len().saturating_sub(1));
    let lines: Vec<Line> = visible
        .iter()
        .enumerate()
        .skip(offset)
        .take(rows_area.max(1))
        .map(|(idx, record)| {
            let marker_style = if idx == offset {
                Style::default().fg(ACCENT)
            } else {
                Style::default().fg(DIM_TEXT)
            };
            Line::from(vec![
                Span::styled(if idx == offset { " › " } else { "   " }, marker_style),
                Span::styled(
                    record.brand.name.clone(),
                    Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {} • {}", record.brand.industry, record.brand.location),
                    Style::default().fg(DIM_TEXT),
                ),
                Span::styled(
                    format!("  — {}", relative_date(record.matched_at, now)),
                    Style::default().fg(DIM_TEXT),
                ),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), regions[1]);
}

fn draw_banner(frame: &mut Frame<'_>, body: Rect, brand: &Brand, ticks_left: u32) {
    let seconds_left = (u64::from(ticks_left) * TICK_MS).div_ceil(1000);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("You and {} are interested", brand.name),
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(Span::styled(
            "in each other.",
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Esc: keep browsing │ Tab: view matches",
            Style::default().fg(DIM_TEXT),
        )),
        Line::from(Span::styled(
            format!("auto-hides in {seconds_left}s"),
            Style::default().fg(DIM_TEXT).add_modifier(Modifier::DIM),
        )),
    ];

    let width = lines
        .iter()
        .map(Line::width)
        .max()
        .unwrap_or(0)
        .saturating_add(4) as u16;
    let height = lines.len().saturating_add(2) as u16;
    let area = centered_rect_by_size(body, width.max(32), height);

    frame.render_widget(Clear, area);
    let popup = Block::default()
        .title(Span::styled(
            "It's a match!",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(popup),
        area,
    );
}
