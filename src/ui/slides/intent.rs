use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SlideIntent {
    /// Start rotating through `count` slides every `interval_ms`.
    Mount {
        count: usize,
        interval_ms: u64,
        now_ms: u64,
    },
    Tick { now_ms: u64 },
    Dispose,
}

impl Intent for SlideIntent {}
