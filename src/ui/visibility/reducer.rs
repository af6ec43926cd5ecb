use crate::ui::mvi::Reducer;
use crate::ui::visibility::intent::VisibilityIntent;
use crate::ui::visibility::state::VisibilityState;

pub struct VisibilityReducer;

impl Reducer for VisibilityReducer {
    type State = VisibilityState;
    type Intent = VisibilityIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            VisibilityIntent::Observe { regions, threshold } => {
                state.observe(regions, threshold);
            }
            VisibilityIntent::Intersect { region, ratio } => {
                state.record(region, ratio);
            }
            VisibilityIntent::Disconnect => state.disconnect(),
        }
        state
    }
}
