//! Auth-session state for the current user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and the dashboard read this to coordinate login redirects
//! and authenticated API calls.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Authentication state holding the access token issued at login.
///
/// The token lives only in memory for the lifetime of the page; there is
/// no persistence, refresh, or restore across reloads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub token: Option<String>,
}

impl AuthState {
    /// Whether a login has completed this session.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}
