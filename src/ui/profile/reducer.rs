use crate::ui::mvi::{reconcile_with, Reducer};
use crate::ui::profile::intent::ProfileIntent;
use crate::ui::profile::state::ProfileState;

pub struct ProfileReducer;

impl Reducer for ProfileReducer {
    type State = ProfileState;
    type Intent = ProfileIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ProfileIntent::Profile(emission) => reconcile_with(
                state,
                emission,
                |state, profile_loading| ProfileState {
                    profile_loading,
                    ..state
                },
                |state, profile| ProfileState { profile, ..state },
            ),
            ProfileIntent::Posts(emission) => reconcile_with(
                state,
                emission,
                |state, posts_loading| ProfileState {
                    posts_loading,
                    ..state
                },
                |state, posts| ProfileState { posts, ..state },
            ),
            ProfileIntent::Saved(profile) => ProfileState { profile, ..state },
        }
    }
}
