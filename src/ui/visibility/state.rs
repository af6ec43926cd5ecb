use std::collections::BTreeSet;

use crate::ui::mvi::UiState;

/// Regions seen at least once this session.
///
/// `visible` only grows; `Disconnect` drops the observation, not the history.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityState {
    observed: BTreeSet<String>,
    visible: BTreeSet<String>,
    threshold: f32,
}

impl Default for VisibilityState {
    fn default() -> Self {
        Self {
            observed: BTreeSet::new(),
            visible: BTreeSet::new(),
            threshold: 0.1,
        }
    }
}

impl UiState for VisibilityState {}

impl VisibilityState {
    pub fn is_observing(&self) -> bool {
        !self.observed.is_empty()
    }

    pub fn is_observed(&self, region: &str) -> bool {
        self.observed.contains(region)
    }

    pub fn is_visible(&self, region: &str) -> bool {
        self.visible.contains(region)
    }

    pub fn visible(&self) -> &BTreeSet<String> {
        &self.visible
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub(super) fn observe(&mut self, regions: Vec<String>, threshold: f32) {
        self.observed.extend(regions);
        self.threshold = threshold;
    }

    pub(super) fn record(&mut self, region: String, ratio: f32) {
        if ratio >= self.threshold && self.observed.contains(&region) {
            self.visible.insert(region);
        }
    }

    pub(super) fn disconnect(&mut self) {
        self.observed.clear();
    }
}
