//! Base trait for intents (user/system actions) in MVI architecture.

use crate::data::TriStateResult;

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (typing a query, pressing like)
/// - Data-source emissions (fetch results, live listener updates)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}

/// One step of an asynchronous subscription as seen by a reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Emission<T> {
    /// The subscription has started; nothing has arrived yet.
    Started,
    /// The data source emitted an element.
    Result(TriStateResult<T>),
}

impl<T> From<TriStateResult<T>> for Emission<T> {
    fn from(result: TriStateResult<T>) -> Self {
        Emission::Result(result)
    }
}
