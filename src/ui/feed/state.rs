use crate::data::Post;
use crate::ui::mvi::{LoadingState, UiState};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeedState {
    pub posts: Vec<Post>,
    pub loading: bool,
}

impl UiState for FeedState {}

impl LoadingState for FeedState {
    fn with_loading(self, loading: bool) -> Self {
        Self { loading, ..self }
    }
}

impl FeedState {
    pub fn post(&self, post_id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == post_id)
    }
}
