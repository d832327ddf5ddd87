use crate::ui::mvi::{reconcile, Reducer};
use crate::ui::search::intent::SearchIntent;
use crate::ui::search::state::SearchState;

pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchState;
    type Intent = SearchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SearchIntent::QueryChanged(query) => SearchState { query, ..state },
            SearchIntent::Results(emission) => {
                reconcile(state, emission, |state, results| SearchState { results, ..state })
            }
            SearchIntent::Cleared => SearchState {
                results: Vec::new(),
                loading: false,
                ..state
            },
        }
    }
}
