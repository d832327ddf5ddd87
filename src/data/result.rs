//! Tri-state result of a single asynchronous fetch or write attempt.
//!
//! Repositories normalize whatever shape the backend SDK produces into
//! this record; controllers only ever look at it through [`Outcome`].

use serde::{Deserialize, Serialize};

/// Human-readable failure attached to a [`TriStateResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub message: String,
}

impl ErrorInfo {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Outcome of one asynchronous attempt: data, in-flight flag, error.
///
/// `error` is authoritative: when it is set, `data` and `in_flight` are
/// ignored. `data` is only meaningful once the attempt is no longer in
/// flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriStateResult<T> {
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub in_flight: Option<bool>,
    #[serde(default)]
    pub error: Option<ErrorInfo>,
}

/// Classified view of a [`TriStateResult`].
#[derive(Debug, PartialEq)]
pub enum Outcome<'a, T> {
    /// Still outstanding.
    Pending,
    /// Finished; data may be absent (treated as empty by consumers).
    Ready(Option<&'a T>),
    /// Failed with the given error.
    Failed(&'a ErrorInfo),
}

impl<T> TriStateResult<T> {
    pub fn loading() -> Self {
        Self {
            data: None,
            in_flight: Some(true),
            error: None,
        }
    }

    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            in_flight: Some(false),
            error: None,
        }
    }

    /// Finished without data (not-found is an empty result, never an error).
    pub fn empty() -> Self {
        Self {
            data: None,
            in_flight: Some(false),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            data: None,
            in_flight: Some(false),
            error: Some(ErrorInfo::new(message)),
        }
    }

    /// Classify this result. A missing `in_flight` flag counts as finished.
    pub fn outcome(&self) -> Outcome<'_, T> {
        if let Some(error) = &self.error {
            return Outcome::Failed(error);
        }
        if self.in_flight == Some(true) {
            return Outcome::Pending;
        }
        Outcome::Ready(self.data.as_ref())
    }

    /// True when no further elements are expected for this attempt.
    pub fn is_terminal(&self) -> bool {
        !matches!(self.outcome(), Outcome::Pending)
    }
}

impl<T> Default for TriStateResult<T> {
    fn default() -> Self {
        Self::loading()
    }
}
