use crate::data::Post;
use crate::ui::mvi::{Emission, Intent};

#[derive(Debug, Clone)]
pub enum FeedIntent {
    /// Element of the live post stream.
    Posts(Emission<Vec<Post>>),
    /// Optimistic like/unlike, dispatched by the view after a successful write.
    SetLiked {
        post_id: String,
        user_id: String,
        liked: bool,
    },
    /// Optimistic removal after a successful delete.
    Removed { post_id: String },
}

impl Intent for FeedIntent {}
