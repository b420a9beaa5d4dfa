//! Base trait for UI state in the MVI architecture.

/// Marker trait for UI state objects.
///
/// States are cloned to produce new states, compared to detect changes,
/// and default to the state shown before anything has happened.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
