use crate::config::StatSpec;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CounterIntent {
    /// Install one idle counter per stat.
    Load {
        stats: Vec<StatSpec>,
        step_count: u32,
        tick_ms: u64,
    },
    /// `region` became visible: start its idle counters.
    Arm { region: String, now_ms: u64 },
    /// Perform every counter tick that is due at `now_ms`.
    Tick { now_ms: u64 },
    /// Cancel pending ticks; counters keep their current value.
    Dispose,
}

impl Intent for CounterIntent {}
