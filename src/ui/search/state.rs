use crate::data::UserSummary;
use crate::ui::mvi::{LoadingState, UiState};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    /// Current text-input value.
    pub query: String,
    pub results: Vec<UserSummary>,
    pub loading: bool,
}

impl UiState for SearchState {}

impl LoadingState for SearchState {
    fn with_loading(self, loading: bool) -> Self {
        Self { loading, ..self }
    }
}
