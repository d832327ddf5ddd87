use crate::data::UserSummary;
use crate::ui::mvi::{Emission, Intent};

#[derive(Debug, Clone)]
pub enum SearchIntent {
    QueryChanged(String),
    Results(Emission<Vec<UserSummary>>),
    /// Drop results without querying (blank input).
    Cleared,
}

impl Intent for SearchIntent {}
