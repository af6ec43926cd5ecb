use crate::ui::counter::intent::CounterIntent;
use crate::ui::counter::state::CounterBoardState;
use crate::ui::mvi::Reducer;

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterBoardState;
    type Intent = CounterIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CounterIntent::Load {
                stats,
                step_count,
                tick_ms,
            } => {
                if !state.is_disposed() {
                    state.load(&stats, step_count, tick_ms);
                }
            }
            CounterIntent::Arm { region, now_ms } => state.arm(&region, now_ms),
            CounterIntent::Tick { now_ms } => state.advance(now_ms),
            CounterIntent::Dispose => state.dispose(),
        }
        state
    }
}
