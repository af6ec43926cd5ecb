use crate::config::StatSpec;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CounterPhase {
    #[default]
    Idle,
    Running {
        ticks: u32,
        next_tick_ms: u64,
    },
    Done {
        ticks: u32,
    },
}

/// A single animated stat.
///
/// After `k` ticks the value is `target * k / step_count`, so increments are
/// uniform, the sequence never decreases and the last tick lands exactly on
/// `target`.
#[derive(Debug, Clone, PartialEq)]
pub struct Counter {
    id: String,
    region: String,
    target: u64,
    phase: CounterPhase,
}

impl Counter {
    pub fn new(spec: &StatSpec) -> Self {
        Self {
            id: spec.id.clone(),
            region: spec.region.clone(),
            target: spec.target,
            phase: CounterPhase::Idle,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    /// Ticks performed so far.
    pub fn ticks(&self) -> u32 {
        match self.phase {
            CounterPhase::Idle => 0,
            CounterPhase::Running { ticks, .. } | CounterPhase::Done { ticks } => ticks,
        }
    }

    /// Exact animated value.
    pub fn value(&self, step_count: u32) -> f64 {
        match self.phase {
            CounterPhase::Idle => 0.0,
            CounterPhase::Running { ticks, .. } => {
                self.target as f64 * ticks as f64 / step_count.max(1) as f64
            }
            CounterPhase::Done { .. } => self.target as f64,
        }
    }

    /// Value as shown on the page: rounded up, never above `target`.
    pub fn displayed(&self, step_count: u32) -> u64 {
        match self.phase {
            CounterPhase::Done { .. } => self.target,
            _ => (self.value(step_count).ceil() as u64).min(self.target),
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self.phase, CounterPhase::Done { .. })
    }

    /// Start an idle counter; the first tick happens immediately.
    pub(super) fn arm(&mut self, step_count: u32, tick_ms: u64, now_ms: u64) {
        if self.phase != CounterPhase::Idle {
            return;
        }
        if self.target == 0 {
            self.phase = CounterPhase::Done { ticks: 0 };
            return;
        }
        self.phase = CounterPhase::Running {
            ticks: 0,
            next_tick_ms: now_ms,
        };
        self.advance(step_count, tick_ms, now_ms);
    }

    pub(super) fn advance(&mut self, step_count: u32, tick_ms: u64, now_ms: u64) {
        let step_count = step_count.max(1);
        let tick_ms = tick_ms.max(1);
        while let CounterPhase::Running {
            ticks,
            next_tick_ms,
        } = self.phase
        {
            if next_tick_ms > now_ms {
                break;
            }
            let ticks = ticks + 1;
            self.phase = if ticks >= step_count {
                CounterPhase::Done { ticks }
            } else {
                CounterPhase::Running {
                    ticks,
                    next_tick_ms: next_tick_ms + tick_ms,
                }
            };
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CounterBoardState {
    counters: Vec<Counter>,
    step_count: u32,
    tick_ms: u64,
    disposed: bool,
}

impl Default for CounterBoardState {
    fn default() -> Self {
        Self {
            counters: Vec::new(),
            step_count: 200,
            tick_ms: 1,
            disposed: false,
        }
    }
}

impl UiState for CounterBoardState {}

impl CounterBoardState {
    pub fn counters(&self) -> &[Counter] {
        &self.counters
    }

    pub fn counter(&self, id: &str) -> Option<&Counter> {
        self.counters.iter().find(|counter| counter.id == id)
    }

    pub fn step_count(&self) -> u32 {
        self.step_count
    }

    pub fn displayed(&self, id: &str) -> Option<u64> {
        self.counter(id).map(|counter| counter.displayed(self.step_count))
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub(super) fn load(&mut self, stats: &[StatSpec], step_count: u32, tick_ms: u64) {
        self.counters = stats.iter().map(Counter::new).collect();
        self.step_count = step_count.max(1);
        self.tick_ms = tick_ms.max(1);
    }

    pub(super) fn arm(&mut self, region: &str, now_ms: u64) {
        if self.disposed {
            return;
        }
        let (step_count, tick_ms) = (self.step_count, self.tick_ms);
        for counter in self.counters.iter_mut().filter(|c| c.region == region) {
            counter.arm(step_count, tick_ms, now_ms);
        }
    }

    pub(super) fn advance(&mut self, now_ms: u64) {
        if self.disposed {
            return;
        }
        let (step_count, tick_ms) = (self.step_count, self.tick_ms);
        for counter in &mut self.counters {
            counter.advance(step_count, tick_ms, now_ms);
        }
    }

    pub(super) fn dispose(&mut self) {
        self.disposed = true;
    }
}
