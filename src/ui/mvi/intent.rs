//! Base trait for intents in the MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (typing in the search box)
/// - System events (debounce timer firing, catalog responses)
pub trait Intent: Send + 'static {}
