//! Client core for the coding-club app: screen state reconciliation,
//! transient messages and the push-notification lifecycle.

pub mod config;
pub mod data;
pub mod logging;
pub mod messages;
pub mod notifications;
pub mod repository;
pub mod ui;
