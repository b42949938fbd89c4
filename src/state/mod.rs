//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The auth session cache is the only process-wide store; everything else a
//! page shows is ephemeral page-local signal state, discarded on navigation.

pub mod auth;
