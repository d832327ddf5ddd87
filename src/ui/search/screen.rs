use std::sync::Arc;

use tokio::sync::watch;

use crate::messages::MessageChannel;
use crate::repository::SearchRepository;
use crate::ui::controller::{Controller, PresentationPolicy};
use crate::ui::search::intent::SearchIntent;
use crate::ui::search::reducer::SearchReducer;
use crate::ui::search::state::SearchState;

const RESULTS_SLOT: &str = "results";

/// Member search. Each keystroke restarts the query; results of an
/// older query are never published once a newer one has started.
pub struct SearchScreen {
    controller: Controller<SearchReducer>,
    repository: Arc<dyn SearchRepository>,
}

impl SearchScreen {
    pub fn new(
        repository: Arc<dyn SearchRepository>,
        messages: MessageChannel,
        policy: PresentationPolicy,
    ) -> Self {
        Self {
            controller: Controller::new(messages, policy),
            repository,
        }
    }

    pub fn search(&self, query: &str) {
        self.controller
            .dispatch(SearchIntent::QueryChanged(query.to_string()));

        let trimmed = query.trim();
        if trimmed.is_empty() {
            self.controller.cancel(RESULTS_SLOT);
            self.controller.dispatch(SearchIntent::Cleared);
            return;
        }

        self.controller.fetch(
            RESULTS_SLOT,
            self.repository.search_users(trimmed),
            SearchIntent::Results,
        );
    }

    pub fn state(&self) -> SearchState {
        self.controller.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.controller.subscribe()
    }

    pub fn close(&self) {
        self.controller.close();
    }
}
