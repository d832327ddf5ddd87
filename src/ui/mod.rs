//! Screen controllers and their state.

pub mod controller;
pub mod feed;
pub mod leaderboard;
pub mod mvi;
pub mod profile;
pub mod search;

pub use controller::{Controller, PresentationPolicy};
