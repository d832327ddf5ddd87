//! Base traits for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}

/// State that carries a loading indicator.
pub trait LoadingState: UiState {
    /// Return a copy of this state with the loading flag replaced.
    fn with_loading(self, loading: bool) -> Self;
}
