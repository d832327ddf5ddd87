use crate::data::LeaderboardEntry;
use crate::ui::mvi::{LoadingState, UiState};

/// Entries are kept ranked: points descending, then name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LeaderboardState {
    pub entries: Vec<LeaderboardEntry>,
    pub loading: bool,
}

impl UiState for LeaderboardState {}

impl LoadingState for LeaderboardState {
    fn with_loading(self, loading: bool) -> Self {
        Self { loading, ..self }
    }
}

impl LeaderboardState {
    /// 1-based rank of `user_id`.
    pub fn rank_of(&self, user_id: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.user_id == user_id)
            .map(|index| index + 1)
    }
}
