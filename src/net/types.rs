//! Wire DTOs for the backend REST boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend response models so serde decoding stays
//! lossless. Record ids accept the backend's `_id` alias; fields the
//! backend only sometimes includes are `Option` or defaulted.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by `/api/login` and `/api/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// Account email address.
    pub email: String,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
}

/// Successful login response: the bearer token plus the user it
/// identifies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Opaque bearer token.
    pub access_token: String,
    /// Token scheme, `"bearer"`.
    pub token_type: String,
    /// Snapshot of the authenticated user.
    pub user: User,
}

/// Registration acknowledgement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResponse {
    /// Human-readable confirmation.
    pub message: String,
    /// Email the account was created under.
    pub email: String,
}

/// One discovered port in a scan result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanPort {
    pub port: u16,
    /// Service name bound to the port (e.g. `"https"`).
    pub service: String,
    /// `"open"`, `"closed"`, or `"filtered"`.
    pub state: String,
    /// Detected product/version banner; may be empty.
    #[serde(default)]
    pub version: String,
}

/// Platform fingerprint attached to a scan result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsInfo {
    pub name: String,
    pub version: String,
    /// Fingerprint confidence, formatted by the backend (e.g. `"94%"`).
    pub accuracy: String,
}

/// A service the scan identified beyond the raw port table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanService {
    pub port: u16,
    pub service: String,
    pub product: String,
    #[serde(default)]
    pub extrainfo: String,
}

/// Full result of `POST /api/scan`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    pub target: String,
    /// `"completed"`, `"running"`, or `"failed"`.
    pub status: String,
    pub ports: Vec<ScanPort>,
    pub os_info: OsInfo,
    pub services: Vec<ScanService>,
    /// ISO 8601 timestamp of the scan.
    pub scan_time: String,
    #[serde(default)]
    pub host_status: String,
    #[serde(default)]
    pub latency: String,
}

/// Simulated HTTP exchange details inside a payload test result.
///
/// The backend shapes this per test type, so everything beyond the basic
/// response metadata is optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PayloadResponse {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub response_time: String,
    #[serde(default)]
    pub content_length: u64,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    pub vulnerability_detected: Option<bool>,
    pub evidence: Option<String>,
    pub risk_level: Option<String>,
    pub recommendation: Option<String>,
    pub protection: Option<String>,
    pub database_type: Option<String>,
}

/// Full result of `POST /api/payload`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PayloadResult {
    pub payload_type: String,
    pub target_url: String,
    pub payload: String,
    /// Whether the simulated payload landed.
    pub success: bool,
    pub response: PayloadResponse,
    pub timestamp: String,
}

/// One activity-log entry from `GET /api/logs`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(alias = "_id")]
    pub id: String,
    pub user_id: String,
    /// Originating tool, `"scan"` or `"payload"`.
    pub tool: String,
    /// The input the tool ran against.
    pub input_data: String,
    /// Tool-specific result payload, kept opaque.
    pub result: serde_json::Value,
    pub timestamp: String,
}

/// A vulnerability record from the CVE browser endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cve {
    #[serde(alias = "_id")]
    pub id: String,
    pub description: String,
    /// `"critical"`, `"high"`, `"medium"`, or `"low"`.
    pub severity: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub reference: String,
    pub published_date: String,
}

/// The lab setup guide, a markdown document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupGuide {
    pub content: String,
    #[serde(default)]
    pub format: String,
}
