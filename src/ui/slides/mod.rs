mod intent;
mod reducer;
mod state;

pub use intent::SlideIntent;
pub use reducer::SlideReducer;
pub use state::SlideState;
