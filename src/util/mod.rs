//! Small browser-facing utilities shared across pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! `config` resolves the API base URL and `lifecycle` provides cancellation
//! flags for in-flight fetches.

pub mod config;
pub mod lifecycle;
