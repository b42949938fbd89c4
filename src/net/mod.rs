//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the single request choke point (credentials, JSON, refresh-retry),
//! `api` exposes typed endpoint functions, and `types` defines the wire schema.

pub mod api;
pub mod http;
pub mod types;
