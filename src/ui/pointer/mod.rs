mod intent;
mod reducer;
mod state;

pub use intent::PointerIntent;
pub use reducer::PointerReducer;
pub use state::PointerState;
