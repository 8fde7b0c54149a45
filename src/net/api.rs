//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` outputs instead of panics so auth and
//! fetch failures degrade to messages without crashing hydration. The
//! server reports failures as `{"detail": "..."}` bodies; the detail is
//! carried through when present so pages can prefer it over their
//! fallback copy.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use super::types::{LoginRequest, RegisterRequest};
use super::types::{HealthEntry, LoginResponse, NewHealthEntry, RecordResponse};
#[cfg(any(test, feature = "hydrate"))]
use super::types::ApiErrorBody;

/// Fallback shown when a login call fails without a server-provided detail.
pub const LOGIN_FALLBACK: &str = "Login failed. Try again.";

/// Fallback for registration failures without a detail.
pub const REGISTER_FALLBACK: &str = "Registration failed. Try again.";

/// Fallback for health-data failures without a detail.
pub const ENTRIES_FALLBACK: &str = "Could not reach the server. Try again.";

/// A failed API call: HTTP status (0 for transport faults) plus the
/// server's `detail` string when one was sent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiError {
    pub status: u16,
    pub detail: Option<String>,
}

impl ApiError {
    /// Transport-level failure with no server response.
    pub fn transport() -> Self {
        Self { status: 0, detail: None }
    }

    /// The server-provided detail, or `fallback`.
    pub fn message_or(&self, fallback: &str) -> String {
        self.detail.clone().unwrap_or_else(|| fallback.to_owned())
    }

    /// Whether the server rejected the bearer token.
    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn detail_from_body(body: &str) -> Option<String> {
    serde_json::from_str::<ApiErrorBody>(body).ok().and_then(|parsed| parsed.detail)
}

#[cfg(feature = "hydrate")]
async fn error_from_response(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let detail = match resp.text().await {
        Ok(body) => detail_from_body(&body),
        Err(_) => None,
    };
    ApiError { status, detail }
}

/// Authenticate via `POST /api/auth/login`.
///
/// A successful response may still omit `access_token`; callers decide how
/// to treat a token-less resolution.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails in transport or the server
/// answers with a non-OK status.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = LoginRequest { email: email.to_owned(), password: password.to_owned() };
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&payload)
            .map_err(|_| ApiError::transport())?
            .send()
            .await
            .map_err(|_| ApiError::transport())?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        resp.json::<LoginResponse>().await.map_err(|_| ApiError::transport())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::transport())
    }
}

/// Create an account via `POST /api/auth/register`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails in transport or the server
/// answers with a non-OK status.
pub async fn register(email: &str, password: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = RegisterRequest { email: email.to_owned(), password: password.to_owned() };
        let resp = gloo_net::http::Request::post("/api/auth/register")
            .json(&payload)
            .map_err(|_| ApiError::transport())?
            .send()
            .await
            .map_err(|_| ApiError::transport())?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::transport())
    }
}

/// Fetch the reading history via `GET /api/healthdata`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or a non-OK status; a 401
/// means the token was rejected.
pub async fn fetch_entries(token: &str) -> Result<Vec<HealthEntry>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/healthdata")
            .header("Authorization", &bearer_header(token))
            .send()
            .await
            .map_err(|_| ApiError::transport())?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        resp.json::<Vec<HealthEntry>>().await.map_err(|_| ApiError::transport())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::transport())
    }
}

/// Record a reading via `POST /api/healthdata`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or a non-OK status; a 401
/// means the token was rejected.
pub async fn record_entry(token: &str, entry: &NewHealthEntry) -> Result<RecordResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/healthdata")
            .header("Authorization", &bearer_header(token))
            .json(entry)
            .map_err(|_| ApiError::transport())?
            .send()
            .await
            .map_err(|_| ApiError::transport())?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        resp.json::<RecordResponse>().await.map_err(|_| ApiError::transport())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, entry);
        Err(ApiError::transport())
    }
}
