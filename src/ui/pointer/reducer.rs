use crate::ui::mvi::Reducer;
use crate::ui::pointer::intent::PointerIntent;
use crate::ui::pointer::state::PointerState;

pub struct PointerReducer;

impl Reducer for PointerReducer {
    type State = PointerState;
    type Intent = PointerIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PointerIntent::Move { .. } if state.released => state,
            PointerIntent::Move { column, row } => PointerState {
                column,
                row,
                released: false,
            },
            PointerIntent::Release => PointerState {
                released: true,
                ..state
            },
        }
    }
}
