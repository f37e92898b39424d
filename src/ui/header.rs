use crate::ui::app::Screen;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(
        &self,
        screen: Screen,
        position: (usize, usize),
        match_count: usize,
    ) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let active_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);

        let (cursor, total) = position;
        let discover_label = format!("Discover {}/{}", cursor.min(total), total);
        let matches_label = format!("Matches ({match_count})");

        let line = Line::from(vec![
            Span::styled("  brandmatch", active_style),
            Span::styled("  │  ", separator_style),
            Span::styled(
                discover_label,
                if screen == Screen::Discover {
                    active_style
                } else {
                    text_style
                },
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(
                matches_label,
                if screen == Screen::Matches {
                    active_style
                } else {
                    text_style
                },
            ),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
