use crate::data::{Post, UserProfile};
use crate::ui::mvi::UiState;

/// The profile and the member's posts load independently; the page is
/// loading until both have settled.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileState {
    pub profile: UserProfile,
    pub posts: Vec<Post>,
    pub profile_loading: bool,
    pub posts_loading: bool,
}

impl UiState for ProfileState {}

impl ProfileState {
    pub fn loading(&self) -> bool {
        self.profile_loading || self.posts_loading
    }

    pub fn is_followed_by(&self, user_id: &str) -> bool {
        self.profile.followers.iter().any(|id| id == user_id)
    }
}
