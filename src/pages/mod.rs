//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, dialog state) and
//! keeps its form/selection state in page-local signals that die with the
//! route. Shared rendering pieces live in `components`.

pub mod auth_callback;
pub mod dashboard;
pub mod history;
pub mod login;
pub mod models;
pub mod prompts;
