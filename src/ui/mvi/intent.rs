//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Timer ticks carrying the current logical time
/// - Surface reports (viewport intersections, pointer moves)
/// - Lifecycle events (mount, dispose)
pub trait Intent: Send + 'static {}
