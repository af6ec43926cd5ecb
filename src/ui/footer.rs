use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const KEY_HINTS: &[(&str, &str)] = &[
    ("↑/↓", "Scroll"),
    ("PgUp/PgDn", "Page"),
    ("1-6", "Jump"),
    ("p", "Projects"),
    ("a", "About"),
    ("q", "Quit"),
];

/// Key hints, scroll position and version.
pub struct Footer {
    /// Percent of the page scrolled past, 0..=100.
    progress: u16,
}

impl Footer {
    pub fn new(progress: u16) -> Self {
        Self {
            progress: progress.min(100),
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let dim = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let key_style = Style::default().fg(ACCENT);

        let mut spans = Vec::with_capacity(KEY_HINTS.len() * 3 + 3);
        let mut used = 0;
        for (index, (key, action)) in KEY_HINTS.iter().enumerate() {
            let separator = if index == 0 { " " } else { " │ " };
            spans.push(Span::styled(separator, dim));
            spans.push(Span::styled(*key, key_style));
            spans.push(Span::styled(format!(": {}", action), dim));
            used += separator.chars().count() + key.chars().count() + action.chars().count() + 2;
        }

        let status = format!("{:>3}%  v{} ", self.progress, VERSION);
        // Pad by char count so the status stays right-aligned with Unicode hints.
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(used)
            .saturating_sub(status.chars().count());
        spans.push(Span::styled(" ".repeat(padding), dim));
        spans.push(Span::styled(status, dim));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
