use crate::ui::mvi::Reducer;
use crate::ui::typewriter::intent::TypewriterIntent;
use crate::ui::typewriter::state::{TypewriterCycle, TypewriterState};

pub struct TypewriterReducer;

impl Reducer for TypewriterReducer {
    type State = TypewriterState;
    type Intent = TypewriterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TypewriterIntent::Mount {
                phrases,
                timing,
                now_ms,
            } => match state {
                TypewriterState::Running { .. } => state,
                _ => match TypewriterCycle::start(phrases, timing) {
                    Some((cycle, delay)) => TypewriterState::Running {
                        cycle,
                        next_step_ms: now_ms + delay.max(1),
                    },
                    None => state,
                },
            },
            TypewriterIntent::Tick { now_ms } => match state {
                TypewriterState::Running {
                    mut cycle,
                    mut next_step_ms,
                } => {
                    // Zero delays are bumped to 1ms so a catch-up loop always ends.
                    while next_step_ms <= now_ms {
                        next_step_ms += cycle.step().max(1);
                    }
                    TypewriterState::Running {
                        cycle,
                        next_step_ms,
                    }
                }
                other => other,
            },
            TypewriterIntent::Dispose => match state {
                TypewriterState::Running { cycle, .. } => TypewriterState::Stopped { cycle },
                other => other,
            },
        }
    }
}
