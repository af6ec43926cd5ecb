use crate::ui::mvi::Reducer;
use crate::ui::slides::intent::SlideIntent;
use crate::ui::slides::state::SlideState;

pub struct SlideReducer;

impl Reducer for SlideReducer {
    type State = SlideState;
    type Intent = SlideIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SlideIntent::Mount {
                count,
                interval_ms,
                now_ms,
            } => match state {
                SlideState::Running { .. } => state,
                _ if count == 0 => state,
                _ => {
                    let interval_ms = interval_ms.max(1);
                    SlideState::Running {
                        count,
                        index: 0,
                        interval_ms,
                        next_advance_ms: now_ms + interval_ms,
                    }
                }
            },
            SlideIntent::Tick { now_ms } => match state {
                SlideState::Running {
                    count,
                    interval_ms,
                    next_advance_ms,
                    index,
                } if next_advance_ms <= now_ms => {
                    let elapsed = (now_ms - next_advance_ms) / interval_ms + 1;
                    SlideState::Running {
                        count,
                        index: (index + (elapsed % count as u64) as usize) % count,
                        interval_ms,
                        next_advance_ms: next_advance_ms + elapsed * interval_ms,
                    }
                }
                other => other,
            },
            SlideIntent::Dispose => match state {
                SlideState::Running { index, .. } => SlideState::Stopped { index },
                other => other,
            },
        }
    }
}
