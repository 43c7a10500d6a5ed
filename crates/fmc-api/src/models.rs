// FMC REST wire models
//
// Request and response shapes for the platform and configuration
// endpoints. Response structs use `#[serde(default)]` liberally because
// field presence varies across FMC versions.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ── Domain listing ───────────────────────────────────────────────────

/// Envelope returned by `GET /api/fmc_platform/v1/info/domain`.
#[derive(Debug, Deserialize)]
pub struct DomainPage {
    #[serde(default)]
    pub items: Vec<Domain>,
    #[serde(default)]
    pub paging: Option<Paging>,
}

/// Paging block attached to list responses.
///
/// Informational only; the domain list fits in a single page on every
/// deployment this client targets.
#[derive(Debug, Clone, Deserialize)]
pub struct Paging {
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub limit: u64,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub pages: u64,
}

/// An administrative domain on the management center.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Domain {
    pub uuid: Uuid,
    pub name: String,
    #[serde(default, rename = "type")]
    pub domain_type: Option<String>,
    /// Catch-all for fields we don't model.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ── Device records ───────────────────────────────────────────────────

/// Creation payload for `POST .../devices/devicerecords`.
///
/// The shape is fixed by the API: `ftdMode` is the *string* `"true"`,
/// not a boolean.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceRecord {
    pub name: String,
    pub host_name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub ftd_mode: String,
}

impl DeviceRecord {
    /// Build the registration record for an FTD appliance reachable at
    /// `host_name`.
    pub fn ftd(name: impl Into<String>, host_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            host_name: host_name.into(),
            record_type: "Device".to_owned(),
            ftd_mode: "true".to_owned(),
        }
    }
}
