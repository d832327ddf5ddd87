use std::sync::Arc;

use tokio::sync::watch;

use crate::messages::MessageChannel;
use crate::repository::{PostRepository, RepoError};
use crate::ui::controller::{Controller, PresentationPolicy};
use crate::ui::feed::intent::FeedIntent;
use crate::ui::feed::reducer::FeedReducer;
use crate::ui::feed::state::FeedState;

const POSTS_SLOT: &str = "posts";

/// Controller for the home feed.
pub struct FeedScreen {
    controller: Controller<FeedReducer>,
    posts: Arc<dyn PostRepository>,
}

impl FeedScreen {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        messages: MessageChannel,
        policy: PresentationPolicy,
    ) -> Self {
        Self {
            controller: Controller::new(messages, policy),
            posts,
        }
    }

    /// Start (or restart) listening to the feed.
    pub fn load(&self) {
        self.controller
            .collect(POSTS_SLOT, self.posts.posts(), FeedIntent::Posts);
    }

    pub async fn like(&self, post_id: &str, user_id: &str) -> Result<(), RepoError> {
        self.controller.write(self.posts.like(post_id, user_id)).await
    }

    pub async fn unlike(&self, post_id: &str, user_id: &str) -> Result<(), RepoError> {
        self.controller.write(self.posts.unlike(post_id, user_id)).await
    }

    pub async fn delete(&self, post_id: &str) -> Result<(), RepoError> {
        self.controller
            .write_with_notice(self.posts.delete(post_id), "Post deleted")
            .await
    }

    pub fn dispatch(&self, intent: FeedIntent) -> FeedState {
        self.controller.dispatch(intent)
    }

    pub fn state(&self) -> FeedState {
        self.controller.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<FeedState> {
        self.controller.subscribe()
    }

    pub fn close(&self) {
        self.controller.close();
    }
}
