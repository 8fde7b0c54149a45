//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the server payloads so serde round-trips stay
//! lossless; optional fields default instead of failing deserialization.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Credentials submitted to the login endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response. `access_token` is absent when the server declines the
/// credentials without raising an error status.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
}

/// Payload for creating an account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

/// Structured error body (`{"detail": "..."}`) returned on failures.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

/// One recorded health reading.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HealthEntry {
    pub id: i64,
    /// Weight in kilograms, rounded to two decimals.
    pub weight: f64,
    /// Blood pressure as `systolic/diastolic`.
    pub bp: String,
    /// Blood glucose in mg/dL, rounded to two decimals.
    pub glucose: f64,
    /// Server-assigned timestamp in ISO-8601.
    pub timestamp: String,
}

/// A reading to record.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewHealthEntry {
    pub weight: f64,
    pub bp: String,
    pub glucose: f64,
}

/// Acknowledgement for a recorded reading.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RecordResponse {
    pub message: String,
    pub data_id: i64,
}
