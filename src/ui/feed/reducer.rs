use crate::ui::feed::intent::FeedIntent;
use crate::ui::feed::state::FeedState;
use crate::ui::mvi::{reconcile, Reducer};

pub struct FeedReducer;

impl Reducer for FeedReducer {
    type State = FeedState;
    type Intent = FeedIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FeedIntent::Posts(emission) => {
                reconcile(state, emission, |state, posts| FeedState { posts, ..state })
            }
            FeedIntent::SetLiked {
                post_id,
                user_id,
                liked,
            } => {
                let posts = state
                    .posts
                    .into_iter()
                    .map(|mut post| {
                        if post.id == post_id {
                            post.likes.retain(|id| id != &user_id);
                            if liked {
                                post.likes.push(user_id.clone());
                            }
                        }
                        post
                    })
                    .collect();
                FeedState { posts, ..state }
            }
            FeedIntent::Removed { post_id } => {
                let posts = state
                    .posts
                    .into_iter()
                    .filter(|post| post.id != post_id)
                    .collect();
                FeedState { posts, ..state }
            }
        }
    }
}
