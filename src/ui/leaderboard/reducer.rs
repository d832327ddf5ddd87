use crate::data::LeaderboardEntry;
use crate::ui::leaderboard::intent::LeaderboardIntent;
use crate::ui::leaderboard::state::LeaderboardState;
use crate::ui::mvi::{reconcile, Reducer};

pub struct LeaderboardReducer;

impl Reducer for LeaderboardReducer {
    type State = LeaderboardState;
    type Intent = LeaderboardIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LeaderboardIntent::Entries(emission) => reconcile(state, emission, |state, entries| {
                LeaderboardState {
                    entries: ranked(entries),
                    ..state
                }
            }),
        }
    }
}

fn ranked(mut entries: Vec<LeaderboardEntry>) -> Vec<LeaderboardEntry> {
    entries.sort_by(|a, b| b.points.cmp(&a.points).then_with(|| a.name.cmp(&b.name)));
    entries
}
