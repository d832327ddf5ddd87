use std::sync::Arc;

use tokio::sync::watch;

use crate::messages::MessageChannel;
use crate::repository::LeaderboardRepository;
use crate::ui::controller::{Controller, PresentationPolicy};
use crate::ui::leaderboard::intent::LeaderboardIntent;
use crate::ui::leaderboard::reducer::LeaderboardReducer;
use crate::ui::leaderboard::state::LeaderboardState;

const ENTRIES_SLOT: &str = "entries";

pub struct LeaderboardScreen {
    controller: Controller<LeaderboardReducer>,
    repository: Arc<dyn LeaderboardRepository>,
}

impl LeaderboardScreen {
    pub fn new(
        repository: Arc<dyn LeaderboardRepository>,
        messages: MessageChannel,
        policy: PresentationPolicy,
    ) -> Self {
        Self {
            controller: Controller::new(messages, policy),
            repository,
        }
    }

    pub fn load(&self) {
        self.controller.collect(
            ENTRIES_SLOT,
            self.repository.leaderboard(),
            LeaderboardIntent::Entries,
        );
    }

    pub fn state(&self) -> LeaderboardState {
        self.controller.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<LeaderboardState> {
        self.controller.subscribe()
    }

    pub fn close(&self) {
        self.controller.close();
    }
}
