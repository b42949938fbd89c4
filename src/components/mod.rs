//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `guard` gates the protected shell on auth state, `layout` renders the
//! navigation chrome around guarded pages, and the remaining components are
//! shared presentation pieces used by more than one page.

pub mod confirm_dialog;
pub mod guard;
pub mod layout;
pub mod result_card;
