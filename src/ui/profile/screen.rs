use std::sync::Arc;

use tokio::sync::watch;

use crate::data::UserProfile;
use crate::messages::MessageChannel;
use crate::repository::{PostRepository, ProfileRepository, RepoError};
use crate::ui::controller::{Controller, PresentationPolicy};
use crate::ui::profile::intent::ProfileIntent;
use crate::ui::profile::reducer::ProfileReducer;
use crate::ui::profile::state::ProfileState;

const PROFILE_SLOT: &str = "profile";
const POSTS_SLOT: &str = "posts";

/// Controller for a member's profile page.
pub struct ProfileScreen {
    controller: Controller<ProfileReducer>,
    profiles: Arc<dyn ProfileRepository>,
    posts: Arc<dyn PostRepository>,
}

impl ProfileScreen {
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        posts: Arc<dyn PostRepository>,
        messages: MessageChannel,
        policy: PresentationPolicy,
    ) -> Self {
        Self {
            controller: Controller::new(messages, policy),
            profiles,
            posts,
        }
    }

    /// Fetch the profile and follow the member's posts.
    pub fn load(&self, user_id: &str) {
        self.controller.fetch(
            PROFILE_SLOT,
            self.profiles.profile(user_id),
            ProfileIntent::Profile,
        );
        self.controller
            .collect(POSTS_SLOT, self.posts.posts_by(user_id), ProfileIntent::Posts);
    }

    /// Write `profile`; the state is replaced only once the write succeeded.
    pub async fn update(&self, profile: UserProfile) -> Result<(), RepoError> {
        self.controller
            .write_with_notice(self.profiles.update(profile.clone()), "Profile updated")
            .await?;
        self.controller.dispatch(ProfileIntent::Saved(profile));
        Ok(())
    }

    pub fn state(&self) -> ProfileState {
        self.controller.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<ProfileState> {
        self.controller.subscribe()
    }

    pub fn close(&self) {
        self.controller.close();
    }
}
