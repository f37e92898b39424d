use crate::catalog::Brand;
use crate::ui::theme::{ACCENT, DIM_TEXT, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

/// Card widget for one brand profile.
pub struct BrandCard<'a> {
    brand: &'a Brand,
}

impl<'a> BrandCard<'a> {
    pub fn new(brand: &'a Brand) -> Self {
        Self { brand }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let dim_style = Style::default().fg(DIM_TEXT);
        let name_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);

        let mut lines = vec![
            Line::from(Span::styled(self.brand.name.clone(), name_style)),
            Line::from(Span::styled(
                format!("{} • {}", self.brand.industry, self.brand.location),
                dim_style,
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Locations        ", dim_style),
                Span::styled(self.brand.total_locations.to_string(), text_style),
            ]),
            Line::from(vec![
                Span::styled("Franchise fee    ", dim_style),
                Span::styled(format_amount(self.brand.franchise_fee), text_style),
            ]),
            Line::from(vec![
                Span::styled("Min. investment  ", dim_style),
                Span::styled(format_amount(self.brand.minimum_investment), text_style),
            ]),
        ];

        if !self.brand.description.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                self.brand.description.clone(),
                text_style,
            )));
        }

        if !self.brand.tags.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                self.brand
                    .tags
                    .iter()
                    .map(|tag| format!("#{tag}"))
                    .collect::<Vec<_>>()
                    .join("  "),
                dim_style,
            )));
        }

        Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

/// Compact money rendering for card rows: 1_500_000_000 → "1.5B".
pub fn format_amount(amount: u64) -> String {
    if amount >= 1_000_000_000 {
        let billions = amount as f64 / 1_000_000_000.0;
        if (billions - billions.trunc()).abs() < f64::EPSILON {
            format!("{}B", billions as u64)
        } else {
            format!("{billions:.1}B")
        }
    } else if amount >= 1_000_000 {
        format!("{}M", amount / 1_000_000)
    } else if amount >= 1_000 {
        format!("{}K", amount / 1_000)
    } else {
        amount.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_pick_the_right_unit() {
        assert_eq!(format_amount(900), "900");
        assert_eq!(format_amount(1_500), "1K");
        assert_eq!(format_amount(500_000_000), "500M");
        assert_eq!(format_amount(2_000_000_000), "2B");
        assert_eq!(format_amount(1_500_000_000), "1.5B");
    }
}
