//! The reconciliation rule every screen applies to data-source emissions.

use super::intent::Emission;
use super::state::LoadingState;

/// Fold one emission into `state`.
///
/// - `Started` and in-flight elements only raise the loading flag.
/// - A failed element leaves the domain fields untouched and clears the
///   loading flag; reporting the error is the controller's job.
/// - A finished element hands its data (empty when absent) to `apply`,
///   which replaces the relevant domain fields.
pub fn reconcile<S, T, F>(state: S, emission: Emission<T>, apply: F) -> S
where
    S: LoadingState,
    T: Default,
    F: FnOnce(S, T) -> S,
{
    reconcile_with(state, emission, S::with_loading, apply)
}

/// [`reconcile`] for states that keep one loading flag per source.
///
/// `set_loading` writes the flag belonging to the source `emission` came
/// from.
pub fn reconcile_with<S, T, L, F>(state: S, emission: Emission<T>, set_loading: L, apply: F) -> S
where
    T: Default,
    L: Fn(S, bool) -> S,
    F: FnOnce(S, T) -> S,
{
    let result = match emission {
        Emission::Started => return set_loading(state, true),
        Emission::Result(result) => result,
    };

    if result.error.is_some() {
        return set_loading(state, false);
    }
    if !result.is_terminal() {
        return set_loading(state, true);
    }

    let data = result.data.unwrap_or_default();
    set_loading(apply(state, data), false)
}
