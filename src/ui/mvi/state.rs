//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States are cloned into new states, compared to skip redundant redraws,
/// and start from `Default` before the view mounts.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
