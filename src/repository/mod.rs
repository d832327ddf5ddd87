//! Repository contracts consumed by the screen controllers.
//!
//! Implementations live outside this crate and wrap the backend SDK; they
//! are responsible for turning SDK-specific result shapes into
//! [`TriStateResult`]. Not-found is reported as an empty result, never as
//! an error.

mod fixture;

use futures::future::BoxFuture;
use futures::stream::BoxStream;
use thiserror::Error;

use crate::data::{LeaderboardEntry, Post, TriStateResult, UserProfile, UserSummary};

pub use fixture::{FixtureError, FixturePostRepository};

/// Failure of a side-effecting repository write.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepoError {
    #[error("{message}")]
    Backend { message: String },

    #[error("You need to be signed in to do that")]
    Unauthenticated,

    #[error("Operation cancelled")]
    Cancelled,
}

impl RepoError {
    pub fn backend(message: impl Into<String>) -> Self {
        RepoError::Backend {
            message: message.into(),
        }
    }
}

/// Live stream of tri-state results.
pub type ResultStream<T> = BoxStream<'static, TriStateResult<T>>;

/// One-shot tri-state fetch.
pub type ResultFuture<T> = BoxFuture<'static, TriStateResult<T>>;

/// Side-effecting write.
pub type WriteFuture = BoxFuture<'static, Result<(), RepoError>>;

pub trait PostRepository: Send + Sync {
    /// Live feed, newest first.
    fn posts(&self) -> ResultStream<Vec<Post>>;

    /// Live list of one author's posts.
    fn posts_by(&self, user_id: &str) -> ResultStream<Vec<Post>>;

    fn like(&self, post_id: &str, user_id: &str) -> WriteFuture;

    fn unlike(&self, post_id: &str, user_id: &str) -> WriteFuture;

    fn delete(&self, post_id: &str) -> WriteFuture;
}

pub trait ProfileRepository: Send + Sync {
    fn profile(&self, user_id: &str) -> ResultFuture<UserProfile>;

    fn update(&self, profile: UserProfile) -> WriteFuture;
}

pub trait LeaderboardRepository: Send + Sync {
    fn leaderboard(&self) -> ResultStream<Vec<LeaderboardEntry>>;
}

pub trait SearchRepository: Send + Sync {
    fn search_users(&self, query: &str) -> ResultFuture<Vec<UserSummary>>;
}
