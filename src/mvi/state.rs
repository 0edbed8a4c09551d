//! Base trait for renderable state.

/// Marker trait for state objects consumed by a view.
///
/// States are cloned into snapshots and compared to detect changes, and
/// `Default` is the state before anything happened.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
