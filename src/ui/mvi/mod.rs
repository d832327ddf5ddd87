//! Model-View-Intent (MVI) primitives shared by every screen.
//!
//! # Architecture
//!
//! ```text
//! Repository ──→ TriStateResult ──→ Emission ──→ Reducer ──→ State ──→ View
//!                                                   ↑                   │
//!                                                   └──── Intent ───────┘
//! ```
//!
//! - **State**: immutable snapshot, replaced wholesale on every step
//! - **Intent**: user actions or data-source emissions
//! - **Reducer**: pure function that transforms state based on intents
//! - **StateStore**: single-writer holder that publishes each snapshot

mod intent;
mod reconcile;
mod reducer;
mod state;
mod store;

pub use intent::{Emission, Intent};
pub use reconcile::{reconcile, reconcile_with};
pub use reducer::Reducer;
pub use state::{LoadingState, UiState};
pub use store::StateStore;
