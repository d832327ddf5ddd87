use crate::data::LeaderboardEntry;
use crate::ui::mvi::{Emission, Intent};

#[derive(Debug, Clone)]
pub enum LeaderboardIntent {
    Entries(Emission<Vec<LeaderboardEntry>>),
}

impl Intent for LeaderboardIntent {}
