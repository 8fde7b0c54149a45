//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `entries`, `login_form`) so individual
//! pages can depend on small focused models.

pub mod auth;
pub mod entries;
pub mod login_form;
