use crate::config::Config;
use crate::feed::ProjectRecord;
use crate::ui::clock::Clock;
use crate::ui::coordinator::ViewCoordinator;
use crate::ui::page::{PageLayout, REGIONS};
use crate::ui::sections::PageContent;
use chrono::Datelike;

/// Rows moved by one mouse-wheel notch.
const WHEEL_STEP: i64 = 3;

pub struct App {
    should_quit: bool,
    config: Config,
    view: ViewCoordinator,
    clock: Box<dyn Clock>,
    /// Body size in cells (cols, rows), known after the first resize.
    size: Option<(u16, u16)>,
    scroll: u32,
    year: i32,
}

impl App {
    pub fn new(config: Config, clock: Box<dyn Clock>) -> Self {
        let view = ViewCoordinator::from_config(&config);
        Self {
            should_quit: false,
            config,
            view,
            clock,
            size: None,
            scroll: 0,
            year: chrono::Utc::now().year(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn view(&self) -> &ViewCoordinator {
        &self.view
    }

    pub fn scroll(&self) -> u32 {
        self.scroll
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Stop the view; the runtime exits on the next loop turn.
    pub fn request_quit(&mut self) {
        self.should_quit = true;
        self.view.teardown();
    }

    pub fn mount(&mut self) {
        self.view.mount(self.clock.now_ms());
        self.report_visibility();
    }

    pub fn on_tick(&mut self) {
        self.view.advance(self.clock.now_ms());
        self.report_visibility();
    }

    /// Body area changed size.
    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
        self.clamp_scroll();
        self.report_visibility();
    }

    pub fn on_pointer(&mut self, column: u16, row: u16) {
        self.view.pointer_moved(column, row);
    }

    pub fn on_projects(&mut self, projects: Vec<ProjectRecord>) {
        self.view.projects_loaded(projects);
        self.clamp_scroll();
        self.report_visibility();
    }

    pub fn scroll_by(&mut self, delta: i64) {
        let target = (self.scroll as i64 + delta).max(0);
        self.scroll = target.min(u32::MAX as i64) as u32;
        self.clamp_scroll();
        self.report_visibility();
    }

    pub fn wheel(&mut self, down: bool) {
        self.scroll_by(if down { WHEEL_STEP } else { -WHEEL_STEP });
    }

    pub fn page(&mut self, down: bool) {
        let rows = self.viewport_rows().max(1) as i64;
        self.scroll_by(if down { rows } else { -rows });
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
        self.report_visibility();
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = self.layout().max_scroll(self.viewport_rows());
        self.report_visibility();
    }

    /// In-page anchor navigation.
    pub fn jump_to(&mut self, region: &str) {
        if let Some(offset) = self.layout().offset_of(region) {
            self.scroll = offset;
            self.clamp_scroll();
            self.report_visibility();
        }
    }

    /// Jump by 1-based position in the navigation bar.
    pub fn jump_to_index(&mut self, index: usize) {
        if let Some(region) = index.checked_sub(1).and_then(|i| REGIONS.get(i)) {
            self.jump_to(region);
        }
    }

    /// Page content at the current body width.
    pub fn content(&self) -> PageContent {
        let width = self.size.map(|(cols, _)| cols).unwrap_or(80);
        PageContent::build(&self.config, &self.view, width, self.year)
    }

    pub fn layout(&self) -> PageLayout {
        self.content().layout()
    }

    /// Region shown at the top of the body.
    pub fn current_region(&self) -> Option<&'static str> {
        self.layout().region_at(self.scroll)
    }

    /// Percent of the scrollable range already passed.
    pub fn progress(&self) -> u16 {
        let max = self.layout().max_scroll(self.viewport_rows());
        if max == 0 {
            return 100;
        }
        (self.scroll.min(max) as u64 * 100 / max as u64) as u16
    }

    fn viewport_rows(&self) -> u32 {
        self.size.map(|(_, rows)| rows as u32).unwrap_or(0)
    }

    fn clamp_scroll(&mut self) {
        let max = self.layout().max_scroll(self.viewport_rows());
        self.scroll = self.scroll.min(max);
    }

    /// Report every region's on-screen ratio, as an intersection observer would.
    fn report_visibility(&mut self) {
        let Some((_, rows)) = self.size else {
            return;
        };
        if !self.view.is_mounted() {
            return;
        }
        let now_ms = self.clock.now_ms();
        for (region, ratio) in self.layout().intersections(self.scroll, rows as u32) {
            self.view.report_intersection(region, ratio, now_ms);
        }
    }
}
