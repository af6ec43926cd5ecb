//! Vertical page geometry: where each region sits and how much of it is on
//! screen for a given scroll offset.

/// Observed regions, in page order.
pub const REGIONS: &[&str] = &[
    "hero",
    "about",
    "tech-stack",
    "projects",
    "philosophy",
    "stats",
];

/// Navigation label for a region.
pub fn region_label(region: &str) -> &'static str {
    match region {
        "hero" => "Home",
        "about" => "About",
        "tech-stack" => "Tech",
        "projects" => "Projects",
        "philosophy" => "Philosophy",
        "stats" => "Stats",
        _ => "",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionSpan {
    pub region: Option<&'static str>,
    pub top: u32,
    pub height: u32,
}

impl RegionSpan {
    pub fn bottom(&self) -> u32 {
        self.top + self.height
    }
}

/// Stacked sections measured in terminal rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLayout {
    spans: Vec<RegionSpan>,
}

impl PageLayout {
    pub fn from_heights<I>(heights: I) -> Self
    where
        I: IntoIterator<Item = (Option<&'static str>, u32)>,
    {
        let mut top = 0;
        let spans = heights
            .into_iter()
            .map(|(region, height)| {
                let span = RegionSpan {
                    region,
                    top,
                    height,
                };
                top += height;
                span
            })
            .collect();
        Self { spans }
    }

    pub fn spans(&self) -> &[RegionSpan] {
        &self.spans
    }

    pub fn total_height(&self) -> u32 {
        self.spans.last().map(RegionSpan::bottom).unwrap_or(0)
    }

    /// Largest scroll offset that still fills the viewport.
    pub fn max_scroll(&self, viewport: u32) -> u32 {
        self.total_height().saturating_sub(viewport)
    }

    pub fn offset_of(&self, region: &str) -> Option<u32> {
        self.span_of(region).map(|span| span.top)
    }

    fn span_of(&self, region: &str) -> Option<&RegionSpan> {
        self.spans.iter().find(|span| span.region == Some(region))
    }

    /// Fraction of `region` inside rows `[scroll, scroll + viewport)`.
    pub fn intersection_ratio(&self, region: &str, scroll: u32, viewport: u32) -> f32 {
        self.span_of(region)
            .map(|span| span_ratio(span, scroll, viewport))
            .unwrap_or(0.0)
    }

    /// Ratio for every named region, in page order.
    pub fn intersections(&self, scroll: u32, viewport: u32) -> Vec<(&'static str, f32)> {
        self.spans
            .iter()
            .filter_map(|span| {
                span.region
                    .map(|region| (region, span_ratio(span, scroll, viewport)))
            })
            .collect()
    }

    /// Named region covering the top row of the viewport.
    pub fn region_at(&self, row: u32) -> Option<&'static str> {
        self.spans
            .iter()
            .find(|span| span.top <= row && row < span.bottom())
            .and_then(|span| span.region)
    }
}

fn span_ratio(span: &RegionSpan, scroll: u32, viewport: u32) -> f32 {
    if span.height == 0 {
        return 0.0;
    }
    let start = span.top.max(scroll);
    let end = span.bottom().min(scroll.saturating_add(viewport));
    end.saturating_sub(start) as f32 / span.height as f32
}

/// Greedy word wrap measured in chars. Words longer than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }
        let needed = if current_len == 0 {
            word.len()
        } else {
            current_len + 1 + word.len()
        };
        if needed > width && current_len > 0 {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current_len += word.len();
        current.extend(word);
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}
