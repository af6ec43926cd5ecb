use crate::ui::page::{region_label, REGIONS};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Brand plus section navigation; the section at the top of the body is highlighted.
pub struct Header<'a> {
    name: &'a str,
    current: Option<&'a str>,
}

impl<'a> Header<'a> {
    pub fn new(name: &'a str, current: Option<&'a str>) -> Self {
        Self { name, current }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled("</>", Style::default().fg(ACCENT)),
            Span::styled("  ", text_style),
            Span::styled(
                self.name.to_string(),
                text_style.add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │ ", separator_style),
        ];
        for (index, region) in REGIONS.iter().enumerate() {
            let style = if self.current == Some(*region) {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                text_style
            };
            spans.push(Span::styled(format!(" {}", index + 1), separator_style));
            spans.push(Span::styled(format!(" {}", region_label(region)), style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
