//! Health-entry list state for the dashboard.
//!
//! DESIGN
//! ======
//! Separating list state from auth state keeps reading history independent
//! of how the session was established.

#[cfg(test)]
#[path = "entries_test.rs"]
mod entries_test;

use crate::net::types::HealthEntry;

/// Shared dashboard state backed by the health-data REST endpoints.
#[derive(Clone, Debug, Default)]
pub struct EntriesState {
    pub items: Vec<HealthEntry>,
    pub loading: bool,
    pub submit_pending: bool,
    pub error: Option<String>,
}
