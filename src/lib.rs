//! BrainBoard backend: signup and login over a single-table user store,
//! issuing opaque bearer tokens.

pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod state;
