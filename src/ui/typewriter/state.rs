use crate::config::TypewriterConfig;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypingMode {
    #[default]
    Typing,
    Holding,
    Deleting,
}

/// Step delays in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    pub type_ms: u64,
    pub hold_ms: u64,
    pub delete_ms: u64,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            type_ms: 100,
            hold_ms: 1500,
            delete_ms: 50,
        }
    }
}

impl From<&TypewriterConfig> for TypewriterTiming {
    fn from(config: &TypewriterConfig) -> Self {
        Self {
            type_ms: config.type_ms,
            hold_ms: config.hold_ms,
            delete_ms: config.delete_ms,
        }
    }
}

/// Position within the phrase cycle.
///
/// `typed` counts chars of `phrases[index]`, so the displayed text is
/// always a prefix of the current phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypewriterCycle {
    phrases: Vec<String>,
    timing: TypewriterTiming,
    index: usize,
    typed: usize,
    mode: TypingMode,
}

impl TypewriterCycle {
    /// Returns `None` for an empty phrase list.
    pub(super) fn start(phrases: Vec<String>, timing: TypewriterTiming) -> Option<(Self, u64)> {
        if phrases.is_empty() {
            return None;
        }
        let mut cycle = Self {
            phrases,
            timing,
            index: 0,
            typed: 0,
            mode: TypingMode::Typing,
        };
        let delay = cycle.enter_phrase();
        Some((cycle, delay))
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn mode(&self) -> TypingMode {
        self.mode
    }

    pub fn phrase(&self) -> &str {
        &self.phrases[self.index]
    }

    pub fn displayed(&self) -> String {
        self.phrase().chars().take(self.typed).collect()
    }

    fn phrase_len(&self) -> usize {
        self.phrase().chars().count()
    }

    /// Begin typing the current phrase; returns the delay before the next step.
    fn enter_phrase(&mut self) -> u64 {
        self.typed = 0;
        if self.phrase_len() == 0 {
            self.mode = TypingMode::Holding;
            self.timing.hold_ms
        } else {
            self.mode = TypingMode::Typing;
            self.timing.type_ms
        }
    }

    /// Apply one due step; returns the delay before the next one.
    pub(super) fn step(&mut self) -> u64 {
        match self.mode {
            TypingMode::Typing => {
                self.typed = (self.typed + 1).min(self.phrase_len());
                if self.typed == self.phrase_len() {
                    self.mode = TypingMode::Holding;
                    self.timing.hold_ms
                } else {
                    self.timing.type_ms
                }
            }
            TypingMode::Holding => {
                self.mode = TypingMode::Deleting;
                if self.typed == 0 {
                    self.next_phrase()
                } else {
                    self.timing.delete_ms
                }
            }
            TypingMode::Deleting => {
                self.typed = self.typed.saturating_sub(1);
                if self.typed == 0 {
                    self.next_phrase()
                } else {
                    self.timing.delete_ms
                }
            }
        }
    }

    fn next_phrase(&mut self) -> u64 {
        self.index = (self.index + 1) % self.phrases.len();
        self.enter_phrase()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum TypewriterState {
    #[default]
    Unmounted,
    Running {
        cycle: TypewriterCycle,
        next_step_ms: u64,
    },
    /// Disposed; the cycle is frozen where it stopped.
    Stopped { cycle: TypewriterCycle },
}

impl UiState for TypewriterState {}

impl TypewriterState {
    pub fn cycle(&self) -> Option<&TypewriterCycle> {
        match self {
            Self::Unmounted => None,
            Self::Running { cycle, .. } | Self::Stopped { cycle } => Some(cycle),
        }
    }

    pub fn displayed(&self) -> String {
        self.cycle().map(TypewriterCycle::displayed).unwrap_or_default()
    }

    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running { .. })
    }
}
