use crate::ui::mvi::UiState;

/// Hero slide index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlideState {
    #[default]
    Unmounted,
    Running {
        count: usize,
        index: usize,
        interval_ms: u64,
        next_advance_ms: u64,
    },
    Stopped {
        index: usize,
    },
}

impl UiState for SlideState {}

impl SlideState {
    pub fn index(&self) -> usize {
        match *self {
            Self::Unmounted => 0,
            Self::Running { index, .. } | Self::Stopped { index } => index,
        }
    }
}
