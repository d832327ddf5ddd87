//! Read-only post repository backed by a JSON file of recorded emissions.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::future::{self, FutureExt};
use futures::stream::{self, StreamExt};
use thiserror::Error;
use tokio::sync::Notify;

use crate::data::{Post, TriStateResult};
use crate::repository::{PostRepository, RepoError, ResultStream, WriteFuture};

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Failed to read fixture '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse fixture '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Replays the same emissions to every subscriber. Writes are rejected.
pub struct FixturePostRepository {
    emissions: Vec<TriStateResult<Vec<Post>>>,
    drained: Arc<Notify>,
}

impl FixturePostRepository {
    pub fn new(emissions: Vec<TriStateResult<Vec<Post>>>) -> Self {
        Self {
            emissions,
            drained: Arc::new(Notify::new()),
        }
    }

    /// Load a JSON array of tri-state results.
    pub fn from_path(path: &Path) -> Result<Self, FixtureError> {
        let content = std::fs::read_to_string(path).map_err(|e| FixtureError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let emissions = serde_json::from_str(&content).map_err(|e| FixtureError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self::new(emissions))
    }

    /// Resolves once a subscriber has consumed every emission.
    pub async fn wait_drained(&self) {
        self.drained.notified().await;
    }

    fn replay(&self) -> ResultStream<Vec<Post>> {
        let drained = Arc::clone(&self.drained);
        let done = stream::once(async move { drained.notify_one() })
            .filter_map(|()| future::ready(None));
        stream::iter(self.emissions.clone()).chain(done).boxed()
    }

    fn read_only() -> WriteFuture {
        future::ready(Err(RepoError::backend("Fixture data is read-only"))).boxed()
    }
}

impl PostRepository for FixturePostRepository {
    fn posts(&self) -> ResultStream<Vec<Post>> {
        self.replay()
    }

    fn posts_by(&self, _user_id: &str) -> ResultStream<Vec<Post>> {
        self.replay()
    }

    fn like(&self, _post_id: &str, _user_id: &str) -> WriteFuture {
        Self::read_only()
    }

    fn unlike(&self, _post_id: &str, _user_id: &str) -> WriteFuture {
        Self::read_only()
    }

    fn delete(&self, _post_id: &str) -> WriteFuture {
        Self::read_only()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_emissions_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"inFlight": true}}, {{"data": [], "inFlight": false}}]"#
        )
        .unwrap();
        let repository = FixturePostRepository::from_path(file.path()).unwrap();
        assert_eq!(repository.emissions.len(), 2);
        assert_eq!(repository.emissions[1], TriStateResult::success(Vec::new()));
    }

    #[test]
    fn invalid_json_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            FixturePostRepository::from_path(file.path()),
            Err(FixtureError::Parse { .. })
        ));
    }

    #[tokio::test]
    async fn replay_yields_every_emission_then_notifies() {
        let repository = FixturePostRepository::new(vec![
            TriStateResult::loading(),
            TriStateResult::failure("offline"),
        ]);
        let items: Vec<_> = repository.posts().collect().await;
        assert_eq!(items.len(), 2);
        repository.wait_drained().await;
    }

    #[tokio::test]
    async fn writes_are_rejected() {
        let repository = FixturePostRepository::new(Vec::new());
        assert!(matches!(
            repository.like("1", "2").await,
            Err(RepoError::Backend { .. })
        ));
    }
}
