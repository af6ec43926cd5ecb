//! Model-View-Intent (MVI) architecture primitives.
//!
//! Every animated part of the page is a reducer over its own state.
//! Timed reducers receive the logical time with each intent, so they
//! can be driven by a real clock or stepped by hand in tests.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of UI state
//! - **Intent**: Timer ticks, surface reports, lifecycle signals
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
