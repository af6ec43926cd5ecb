use crate::ui::mvi::Intent;
use crate::ui::typewriter::state::TypewriterTiming;

#[derive(Debug, Clone)]
pub enum TypewriterIntent {
    /// Start cycling from the first phrase with nothing typed.
    /// Ignored while already running or when `phrases` is empty.
    Mount {
        phrases: Vec<String>,
        timing: TypewriterTiming,
        now_ms: u64,
    },
    /// Perform every step that is due at `now_ms`.
    Tick { now_ms: u64 },
    /// Cancel pending steps. The current text stays on screen.
    Dispose,
}

impl Intent for TypewriterIntent {}
