//! Page content, one block of lines per section.
//!
//! A section whose region has not entered the viewport yet is drawn as blank
//! rows of the same height, so the page geometry never depends on visibility.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::config::Config;
use crate::ui::coordinator::ViewCoordinator;
use crate::ui::page::{region_label, wrap, PageLayout, REGIONS};
use crate::ui::theme::{
    ACCENT, ACCENT_DEEP, ACCENT_SOFT, BODY_TEXT, HEADER_TEXT, MUTED_TEXT, TRACK,
};

const INDENT: &str = "  ";
const MAX_TOPICS: usize = 3;
const BAR_WIDTH: usize = 30;

pub struct Section {
    pub region: Option<&'static str>,
    pub lines: Vec<Line<'static>>,
}

impl Section {
    fn new(region: Option<&'static str>) -> Self {
        Self {
            region,
            lines: Vec::new(),
        }
    }

    fn push(&mut self, line: impl Into<Line<'static>>) {
        self.lines.push(line.into());
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn title(&mut self, text: &str) {
        self.blank();
        self.push(Line::from(Span::styled(
            format!("{INDENT}{text}"),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )));
        self.push(Line::from(Span::styled(
            format!("{INDENT}{}", "━".repeat(8)),
            Style::default().fg(ACCENT),
        )));
        self.blank();
    }

    fn paragraph(&mut self, text: &str, width: usize, style: Style) {
        for row in wrap(text, width) {
            self.push(Line::from(Span::styled(format!("{INDENT}{row}"), style)));
        }
    }

    /// Blank out the content but keep its height.
    fn conceal(&mut self) {
        for line in &mut self.lines {
            *line = Line::default();
        }
    }
}

/// Everything the page shows, top to bottom.
pub struct PageContent {
    pub sections: Vec<Section>,
}

impl PageContent {
    pub fn build(config: &Config, view: &ViewCoordinator, width: u16, year: i32) -> Self {
        let text_width = (width as usize).saturating_sub(INDENT.len() * 2).max(10);
        let mut sections = vec![
            hero(config, view, text_width),
            about(config, text_width),
            tech_stack(config),
            projects(config, view, text_width),
            philosophy(config, text_width),
            stats(config, view),
            footer(config, year),
        ];
        for section in &mut sections {
            if let Some(region) = section.region {
                if !view.is_visible(region) {
                    section.conceal();
                }
            }
        }
        Self { sections }
    }

    pub fn layout(&self) -> PageLayout {
        PageLayout::from_heights(
            self.sections
                .iter()
                .map(|section| (section.region, section.lines.len() as u32)),
        )
    }

    /// Rows `[scroll, scroll + height)` of the page.
    pub fn window(self, scroll: u32, height: u16) -> Vec<Line<'static>> {
        self.sections
            .into_iter()
            .flat_map(|section| section.lines)
            .skip(scroll as usize)
            .take(height as usize)
            .collect()
    }
}

fn hero(config: &Config, view: &ViewCoordinator, width: usize) -> Section {
    let mut section = Section::new(Some("hero"));
    let slide = config
        .slides
        .get(view.current_slide())
        .or_else(|| config.slides.first());

    section.blank();
    section.blank();
    if let Some(slide) = slide {
        section.push(Line::from(Span::styled(
            format!("{INDENT}{}", slide.headline),
            Style::default().fg(ACCENT_SOFT).add_modifier(Modifier::BOLD),
        )));
        section.push(Line::from(Span::styled(
            format!("{INDENT}{}", slide.subheadline),
            Style::default().fg(MUTED_TEXT),
        )));
    }
    section.blank();
    section.push(Line::from(vec![
        Span::styled(format!("{INDENT}I'm a "), Style::default().fg(HEADER_TEXT)),
        Span::styled(
            view.displayed(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "▌",
            Style::default().fg(ACCENT).add_modifier(Modifier::SLOW_BLINK),
        ),
    ]));
    section.blank();
    section.paragraph(&config.profile.tagline, width, Style::default().fg(BODY_TEXT));
    section.blank();
    section.push(Line::from(vec![
        Span::styled(INDENT, Style::default()),
        Span::styled(
            " p  View Projects ",
            Style::default().fg(HEADER_TEXT).bg(ACCENT_DEEP),
        ),
        Span::raw("   "),
        Span::styled(" a  Learn More ", Style::default().fg(ACCENT_SOFT)),
    ]));
    section.blank();
    section
}

fn about(config: &Config, width: usize) -> Section {
    let mut section = Section::new(Some("about"));
    section.title("About & Experience");
    section.push(Line::from(Span::styled(
        format!("{INDENT}About Me"),
        Style::default().fg(ACCENT_SOFT).add_modifier(Modifier::BOLD),
    )));
    section.paragraph(&config.profile.bio, width, Style::default().fg(BODY_TEXT));
    section.blank();

    for skill in &config.skills {
        section.push(Line::from(vec![
            Span::styled(format!("{INDENT}• {:<24}", skill.label), Style::default().fg(BODY_TEXT)),
            Span::styled(skill.value.clone(), Style::default().fg(ACCENT_SOFT)),
        ]));
    }
    section.blank();

    section.push(Line::from(Span::styled(
        format!("{INDENT}Professional Experience"),
        Style::default().fg(ACCENT_SOFT).add_modifier(Modifier::BOLD),
    )));
    for exp in &config.experience {
        section.push(Line::from(Span::styled(
            format!("{INDENT}{}", exp.role),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )));
        section.push(Line::from(Span::styled(
            format!("{INDENT}{} • {}", exp.company, exp.period),
            Style::default().fg(ACCENT),
        )));
        section.paragraph(&exp.description, width, Style::default().fg(MUTED_TEXT));
        section.blank();
    }
    section
}

fn tech_stack(config: &Config) -> Section {
    let mut section = Section::new(Some("tech-stack"));
    section.title("Tech Stack");
    let name_width = config
        .tech_stack
        .iter()
        .map(|tech| tech.name.chars().count())
        .max()
        .unwrap_or(0);

    for tech in &config.tech_stack {
        let percentage = tech.percentage.min(100) as usize;
        let filled = BAR_WIDTH * percentage / 100;
        section.push(Line::from(vec![
            Span::styled(
                format!("{INDENT}{:<width$}  ", tech.name, width = name_width),
                Style::default().fg(BODY_TEXT),
            ),
            Span::styled("█".repeat(filled), Style::default().fg(ACCENT)),
            Span::styled("░".repeat(BAR_WIDTH - filled), Style::default().fg(TRACK)),
            Span::styled(format!(" {:>3}%", percentage), Style::default().fg(MUTED_TEXT)),
        ]));
    }
    section.blank();
    section
}

fn projects(config: &Config, view: &ViewCoordinator, width: usize) -> Section {
    let mut section = Section::new(Some("projects"));
    section.title("Featured Projects");

    let projects = view.active_projects();
    if projects.is_empty() {
        section.push(Line::from(Span::styled(
            format!("{INDENT}Loading projects…"),
            Style::default().fg(MUTED_TEXT),
        )));
        section.blank();
    }

    for project in projects {
        let mut heading = vec![Span::styled(
            format!("{INDENT}{}", project.name),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )];
        if let Some(language) = &project.language {
            heading.push(Span::styled(
                format!("  [{}]", language),
                Style::default().fg(ACCENT_SOFT),
            ));
        }
        section.push(Line::from(heading));
        section.paragraph(project.summary(), width, Style::default().fg(MUTED_TEXT));

        let topics = project.leading_topics(MAX_TOPICS);
        if !topics.is_empty() {
            let chips = topics
                .iter()
                .map(|topic| format!("#{topic}"))
                .collect::<Vec<_>>()
                .join(" ");
            section.push(Line::from(Span::styled(
                format!("{INDENT}{chips}"),
                Style::default().fg(ACCENT),
            )));
        }
        section.push(Line::from(Span::styled(
            format!("{INDENT}↗ {}", project.url),
            Style::default().fg(BODY_TEXT).add_modifier(Modifier::UNDERLINED),
        )));
        section.blank();
    }

    section.push(Line::from(vec![
        Span::styled(format!("{INDENT}View More Projects: "), Style::default().fg(HEADER_TEXT)),
        Span::styled(
            format!("https://github.com/{}", config.feed.owner),
            Style::default().fg(ACCENT_SOFT),
        ),
    ]));
    section.blank();
    section
}

fn philosophy(config: &Config, width: usize) -> Section {
    let mut section = Section::new(Some("philosophy"));
    section.title("Design Philosophy");
    for principle in &config.philosophy {
        section.push(Line::from(Span::styled(
            format!("{INDENT}{}", principle.title),
            Style::default().fg(ACCENT_SOFT).add_modifier(Modifier::BOLD),
        )));
        section.paragraph(&principle.description, width, Style::default().fg(MUTED_TEXT));
        section.blank();
    }
    section
}

fn stats(config: &Config, view: &ViewCoordinator) -> Section {
    let mut section = Section::new(Some("stats"));
    section.title("Achievements & Stats");
    let values = view.counter_values();
    for stat in &config.stats {
        let value = values.get(&stat.id).copied().unwrap_or(0);
        section.push(Line::from(vec![
            Span::styled(
                format!("{INDENT}{:>6}{:<2}", value, stat.suffix),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", stat.label), Style::default().fg(MUTED_TEXT)),
        ]));
    }
    section.blank();
    section
}

fn footer(config: &Config, year: i32) -> Section {
    let mut section = Section::new(None);
    let profile = &config.profile;
    section.push(Line::from(Span::styled(
        format!("{INDENT}{}", "─".repeat(40)),
        Style::default().fg(TRACK),
    )));
    section.push(Line::from(Span::styled(
        format!("{INDENT}{}", profile.name),
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    )));
    section.push(Line::from(Span::styled(
        format!(
            "{INDENT}Crafting digital experiences with passion and precision. \
             Let's build something amazing together."
        ),
        Style::default().fg(MUTED_TEXT),
    )));
    section.blank();
    for social in &profile.socials {
        section.push(Line::from(vec![
            Span::styled(format!("{INDENT}{:<10}", social.label), Style::default().fg(ACCENT_SOFT)),
            Span::styled(social.url.clone(), Style::default().fg(BODY_TEXT)),
        ]));
    }
    section.blank();

    let mut links = vec![Span::styled(
        format!("{INDENT}Quick Links "),
        Style::default().fg(HEADER_TEXT),
    )];
    for (index, region) in REGIONS.iter().enumerate() {
        links.push(Span::styled(
            format!(" {} ", index + 1),
            Style::default().fg(ACCENT),
        ));
        links.push(Span::styled(
            region_label(region),
            Style::default().fg(MUTED_TEXT),
        ));
    }
    section.push(Line::from(links));
    section.push(Line::from(vec![
        Span::styled(format!("{INDENT}Connect    "), Style::default().fg(HEADER_TEXT)),
        Span::styled(profile.email.clone(), Style::default().fg(ACCENT_SOFT)),
    ]));
    section.blank();
    section.push(Line::from(Span::styled(
        format!("{INDENT}© {} {}. All rights reserved.", year, profile.name),
        Style::default().fg(MUTED_TEXT),
    )));
    section.blank();
    section
}
