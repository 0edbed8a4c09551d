//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (flipping a tile, editing a setting)
/// - Deferred system events (clock ticks, the end of a mismatch pause)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
