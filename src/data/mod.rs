//! Data contracts shared by repositories and screen controllers.

pub mod model;
pub mod result;

pub use model::{LeaderboardEntry, Post, UserProfile, UserSummary};
pub use result::{ErrorInfo, Outcome, TriStateResult};
