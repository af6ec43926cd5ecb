mod intent;
mod reducer;
mod state;

pub use intent::TypewriterIntent;
pub use reducer::TypewriterReducer;
pub use state::{TypewriterCycle, TypewriterState, TypewriterTiming, TypingMode};
