//! Shared test utilities and fake repositories.

#![allow(dead_code, unused_imports)]

pub mod mock_push;

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;

use codeclub::data::{LeaderboardEntry, Post, TriStateResult, UserProfile, UserSummary};
use codeclub::notifications::{Notification, NotificationDisplay};
use codeclub::repository::{
    LeaderboardRepository, PostRepository, ProfileRepository, RepoError, ResultFuture,
    ResultStream, SearchRepository, WriteFuture,
};
use futures::channel::{mpsc, oneshot};
use futures::future::{self, FutureExt};
use futures::stream::{self, StreamExt};
use parking_lot::Mutex;
use tokio::sync::watch;

pub type Feed<T> = mpsc::UnboundedSender<TriStateResult<T>>;

/// Wait until the published state satisfies `predicate`.
pub async fn wait_for<S: Clone>(
    receiver: &mut watch::Receiver<S>,
    predicate: impl FnMut(&S) -> bool,
) -> S {
    let state = tokio::time::timeout(Duration::from_secs(2), receiver.wait_for(predicate))
        .await
        .expect("timed out waiting for state")
        .expect("state channel closed");
    S::clone(&state)
}

/// Give spawned tasks a chance to run.
pub async fn settle() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
    tokio::time::sleep(Duration::from_millis(20)).await;
}

pub fn post(id: &str, author: &str) -> Post {
    Post {
        id: id.to_string(),
        author_id: author.to_string(),
        author_name: format!("user {}", author),
        content: format!("post {}", id),
        ..Default::default()
    }
}

/// Queue of live streams: each subscription takes the next one.
pub struct StreamQueue<T> {
    pending: Mutex<VecDeque<mpsc::UnboundedReceiver<TriStateResult<T>>>>,
}

impl<T: Send + 'static> StreamQueue<T> {
    pub fn new() -> Self {
        Self {
            pending: Mutex::new(VecDeque::new()),
        }
    }

    /// Prepare the stream handed to the next subscriber.
    pub fn next_feed(&self) -> Feed<T> {
        let (sender, receiver) = mpsc::unbounded();
        self.pending.lock().push_back(receiver);
        sender
    }

    fn take(&self) -> ResultStream<T> {
        match self.pending.lock().pop_front() {
            Some(receiver) => receiver.boxed(),
            None => stream::empty().boxed(),
        }
    }
}

pub struct FakePosts {
    pub feed: StreamQueue<Vec<Post>>,
    pub by_author: StreamQueue<Vec<Post>>,
    pub writes: Mutex<Vec<String>>,
    write_result: Mutex<Result<(), RepoError>>,
}

impl FakePosts {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            feed: StreamQueue::new(),
            by_author: StreamQueue::new(),
            writes: Mutex::new(Vec::new()),
            write_result: Mutex::new(Ok(())),
        })
    }

    pub fn fail_writes(&self, error: RepoError) {
        *self.write_result.lock() = Err(error);
    }

    fn record(&self, write: String) -> WriteFuture {
        self.writes.lock().push(write);
        future::ready(self.write_result.lock().clone()).boxed()
    }
}

impl PostRepository for FakePosts {
    fn posts(&self) -> ResultStream<Vec<Post>> {
        self.feed.take()
    }

    fn posts_by(&self, _user_id: &str) -> ResultStream<Vec<Post>> {
        self.by_author.take()
    }

    fn like(&self, post_id: &str, user_id: &str) -> WriteFuture {
        self.record(format!("like:{}:{}", post_id, user_id))
    }

    fn unlike(&self, post_id: &str, user_id: &str) -> WriteFuture {
        self.record(format!("unlike:{}:{}", post_id, user_id))
    }

    fn delete(&self, post_id: &str) -> WriteFuture {
        self.record(format!("delete:{}", post_id))
    }
}

pub struct FakeProfiles {
    pub profile: Mutex<TriStateResult<UserProfile>>,
    pub updates: Mutex<Vec<UserProfile>>,
    update_result: Mutex<Result<(), RepoError>>,
}

impl FakeProfiles {
    pub fn new(profile: TriStateResult<UserProfile>) -> Arc<Self> {
        Arc::new(Self {
            profile: Mutex::new(profile),
            updates: Mutex::new(Vec::new()),
            update_result: Mutex::new(Ok(())),
        })
    }

    pub fn fail_updates(&self, error: RepoError) {
        *self.update_result.lock() = Err(error);
    }
}

impl ProfileRepository for FakeProfiles {
    fn profile(&self, _user_id: &str) -> ResultFuture<UserProfile> {
        future::ready(self.profile.lock().clone()).boxed()
    }

    fn update(&self, profile: UserProfile) -> WriteFuture {
        self.updates.lock().push(profile);
        future::ready(self.update_result.lock().clone()).boxed()
    }
}

pub struct FakeLeaderboard {
    pub entries: StreamQueue<Vec<LeaderboardEntry>>,
}

impl FakeLeaderboard {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            entries: StreamQueue::new(),
        })
    }
}

impl LeaderboardRepository for FakeLeaderboard {
    fn leaderboard(&self) -> ResultStream<Vec<LeaderboardEntry>> {
        self.entries.take()
    }
}

/// Search whose answers are released by the test, per query.
pub struct FakeSearch {
    answers: Mutex<HashMap<String, oneshot::Sender<TriStateResult<Vec<UserSummary>>>>>,
    pub queries: Mutex<Vec<String>>,
}

impl FakeSearch {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            answers: Mutex::new(HashMap::new()),
            queries: Mutex::new(Vec::new()),
        })
    }

    /// Resolve the outstanding search for `query`. Returns false if no
    /// one is listening any more.
    pub fn answer(&self, query: &str, result: TriStateResult<Vec<UserSummary>>) -> bool {
        match self.answers.lock().remove(query) {
            Some(sender) => sender.send(result).is_ok(),
            None => false,
        }
    }
}

impl SearchRepository for FakeSearch {
    fn search_users(&self, query: &str) -> ResultFuture<Vec<UserSummary>> {
        let (sender, receiver) = oneshot::channel();
        self.answers.lock().insert(query.to_string(), sender);
        self.queries.lock().push(query.to_string());
        async move {
            receiver
                .await
                .unwrap_or_else(|_| TriStateResult::failure("search abandoned"))
        }
        .boxed()
    }
}

/// Display that records what it was asked to show.
#[derive(Default)]
pub struct RecordingDisplay {
    pub shown: Mutex<Vec<Notification>>,
}

impl NotificationDisplay for RecordingDisplay {
    fn show(&self, notification: &Notification) {
        self.shown.lock().push(notification.clone());
    }
}
