//! View-state bag shared by the page animations.
//!
//! One coordinator exists per mounted view. It owns every animation state
//! machine, feeds them ticks and surface reports, and is the only thing the
//! renderer reads from.

use std::collections::{BTreeMap, BTreeSet};

use crate::config::{Config, StatSpec};
use crate::feed::ProjectRecord;
use crate::ui::counter::{CounterBoardState, CounterIntent, CounterReducer};
use crate::ui::mvi::Reducer;
use crate::ui::page::REGIONS;
use crate::ui::pointer::{PointerIntent, PointerReducer, PointerState};
use crate::ui::slides::{SlideIntent, SlideReducer, SlideState};
use crate::ui::typewriter::{TypewriterIntent, TypewriterReducer, TypewriterState, TypewriterTiming};
use crate::ui::visibility::{VisibilityIntent, VisibilityReducer, VisibilityState};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Lifecycle {
    Created,
    Mounted,
    TornDown,
}

/// Inputs the coordinator needs from configuration.
#[derive(Debug, Clone)]
pub struct ViewSettings {
    pub phrases: Vec<String>,
    pub timing: TypewriterTiming,
    pub regions: Vec<String>,
    pub visibility_threshold: f32,
    pub stats: Vec<StatSpec>,
    pub counter_steps: u32,
    pub counter_tick_ms: u64,
    pub slide_count: usize,
    pub slide_interval_ms: u64,
}

impl From<&Config> for ViewSettings {
    fn from(config: &Config) -> Self {
        Self {
            phrases: config.typewriter.phrases.clone(),
            timing: TypewriterTiming::from(&config.typewriter),
            regions: REGIONS.iter().map(|region| region.to_string()).collect(),
            visibility_threshold: config.animation.visibility_threshold,
            stats: config.stats.clone(),
            counter_steps: config.animation.counter_steps,
            counter_tick_ms: config.animation.counter_tick_ms,
            slide_count: config.slides.len(),
            slide_interval_ms: config.animation.slide_interval_ms,
        }
    }
}

pub struct ViewCoordinator {
    settings: ViewSettings,
    lifecycle: Lifecycle,
    typewriter: TypewriterState,
    visibility: VisibilityState,
    counters: CounterBoardState,
    slides: SlideState,
    pointer: PointerState,
    projects: Vec<ProjectRecord>,
}

impl ViewCoordinator {
    pub fn new(settings: ViewSettings) -> Self {
        Self {
            settings,
            lifecycle: Lifecycle::Created,
            typewriter: TypewriterState::default(),
            visibility: VisibilityState::default(),
            counters: CounterBoardState::default(),
            slides: SlideState::default(),
            pointer: PointerState::default(),
            projects: Vec::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(ViewSettings::from(config))
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_mounted(&self) -> bool {
        self.lifecycle == Lifecycle::Mounted
    }

    /// Start every animation. Only the first call has an effect.
    pub fn mount(&mut self, now_ms: u64) {
        if self.lifecycle != Lifecycle::Created {
            return;
        }
        self.lifecycle = Lifecycle::Mounted;

        let settings = &self.settings;
        let typewriter = TypewriterIntent::Mount {
            phrases: settings.phrases.clone(),
            timing: settings.timing,
            now_ms,
        };
        let visibility = VisibilityIntent::Observe {
            regions: settings.regions.clone(),
            threshold: settings.visibility_threshold,
        };
        let counters = CounterIntent::Load {
            stats: settings.stats.clone(),
            step_count: settings.counter_steps,
            tick_ms: settings.counter_tick_ms,
        };
        let slides = SlideIntent::Mount {
            count: settings.slide_count,
            interval_ms: settings.slide_interval_ms,
            now_ms,
        };

        dispatch_mvi!(self, typewriter, TypewriterReducer, typewriter);
        dispatch_mvi!(self, visibility, VisibilityReducer, visibility);
        dispatch_mvi!(self, counters, CounterReducer, counters);
        dispatch_mvi!(self, slides, SlideReducer, slides);
        tracing::debug!(
            phrases = self.settings.phrases.len(),
            regions = self.settings.regions.len(),
            stats = self.settings.stats.len(),
            "View mounted"
        );
    }

    /// Deliver one tick at `now_ms` to every timed component.
    pub fn advance(&mut self, now_ms: u64) {
        if !self.is_mounted() {
            return;
        }
        dispatch_mvi!(self, typewriter, TypewriterReducer, TypewriterIntent::Tick { now_ms });
        dispatch_mvi!(self, counters, CounterReducer, CounterIntent::Tick { now_ms });
        dispatch_mvi!(self, slides, SlideReducer, SlideIntent::Tick { now_ms });
    }

    /// Record an intersection report from the surface.
    ///
    /// Counters owned by a region start the first time that region becomes
    /// visible and never again.
    pub fn report_intersection(&mut self, region: &str, ratio: f32, now_ms: u64) {
        if !self.is_mounted() {
            return;
        }
        let was_visible = self.visibility.is_visible(region);
        dispatch_mvi!(
            self,
            visibility,
            VisibilityReducer,
            VisibilityIntent::Intersect {
                region: region.to_string(),
                ratio,
            }
        );
        if !was_visible && self.visibility.is_visible(region) {
            tracing::debug!(region, ratio, "Region entered viewport");
            dispatch_mvi!(
                self,
                counters,
                CounterReducer,
                CounterIntent::Arm {
                    region: region.to_string(),
                    now_ms,
                }
            );
        }
    }

    pub fn pointer_moved(&mut self, column: u16, row: u16) {
        if !self.is_mounted() {
            return;
        }
        dispatch_mvi!(self, pointer, PointerReducer, PointerIntent::Move { column, row });
    }

    /// Replace the gallery list wholesale.
    pub fn projects_loaded(&mut self, projects: Vec<ProjectRecord>) {
        if self.lifecycle == Lifecycle::TornDown {
            return;
        }
        self.projects = projects;
    }

    /// Cancel every timer and observer. Nothing mutates afterwards.
    pub fn teardown(&mut self) {
        if self.lifecycle == Lifecycle::TornDown {
            return;
        }
        self.lifecycle = Lifecycle::TornDown;
        dispatch_mvi!(self, typewriter, TypewriterReducer, TypewriterIntent::Dispose);
        dispatch_mvi!(self, visibility, VisibilityReducer, VisibilityIntent::Disconnect);
        dispatch_mvi!(self, counters, CounterReducer, CounterIntent::Dispose);
        dispatch_mvi!(self, slides, SlideReducer, SlideIntent::Dispose);
        dispatch_mvi!(self, pointer, PointerReducer, PointerIntent::Release);
        tracing::debug!("View torn down");
    }

    /// Current typewriter text.
    pub fn displayed(&self) -> String {
        self.typewriter.displayed()
    }

    pub fn typewriter(&self) -> &TypewriterState {
        &self.typewriter
    }

    pub fn visible_regions(&self) -> &BTreeSet<String> {
        self.visibility.visible()
    }

    pub fn is_visible(&self, region: &str) -> bool {
        self.visibility.is_visible(region)
    }

    pub fn visibility(&self) -> &VisibilityState {
        &self.visibility
    }

    /// Displayed value per stat id.
    pub fn counter_values(&self) -> BTreeMap<String, u64> {
        let step_count = self.counters.step_count();
        self.counters
            .counters()
            .iter()
            .map(|counter| (counter.id().to_string(), counter.displayed(step_count)))
            .collect()
    }

    pub fn counters(&self) -> &CounterBoardState {
        &self.counters
    }

    pub fn active_projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn current_slide(&self) -> usize {
        self.slides.index()
    }

    pub fn pointer(&self) -> (u16, u16) {
        self.pointer.position()
    }
}
