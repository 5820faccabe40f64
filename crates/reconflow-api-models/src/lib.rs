#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::multiple_crate_versions)]
//! Shared HTTP DTOs for the ReconFlow summary endpoints.
//!
//! The web shell only reads two resources, `GET /tools/stats` and
//! `GET /scan-results`. Both are decoded permissively here so the UI crate can
//! treat every rejected body as a single "fetch failed" outcome.

mod error;

pub use error::PayloadError;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Scan statuses the backend reports for jobs that have not finished yet.
pub const IN_FLIGHT_STATUSES: [&str; 2] = ["pending", "running"];

/// Aggregate counts over the recon tool inventory.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ToolStats {
    /// Tools whose installation finished successfully.
    pub installed: u32,
    /// Tools that have never been installed.
    pub not_installed: u32,
    /// Tools whose last installation attempt failed.
    pub failed: u32,
    /// Tools currently reachable.
    pub online: u32,
    /// Tools currently executing a job.
    pub busy: u32,
}

impl ToolStats {
    /// Decode a `/tools/stats` body.
    ///
    /// Two shapes are accepted: the flat record mirroring this struct, and the
    /// grouped document (`installation` + `status` sections) served by the
    /// ReconFlow backend. Counts missing from a recognized shape read as zero.
    ///
    /// # Errors
    /// Returns [`PayloadError`] when the body is not an object, carries a count
    /// that is not a non-negative integer, or contains none of the known counts.
    pub fn from_value(value: Value) -> Result<Self, PayloadError> {
        if !value.is_object() {
            return Err(PayloadError::NotAnObject {
                found: json_kind(&value),
            });
        }
        let payload: ToolStatsPayload =
            serde_json::from_value(value).map_err(|err| PayloadError::InvalidCounts {
                detail: err.to_string(),
            })?;
        payload.into_stats()
    }
}

/// Union of both wire shapes; the grouped sections win when either is present.
#[derive(Deserialize)]
struct ToolStatsPayload {
    installation: Option<InstallationCounts>,
    status: Option<StatusCounts>,
    installed: Option<u32>,
    not_installed: Option<u32>,
    failed: Option<u32>,
    online: Option<u32>,
    busy: Option<u32>,
}

#[derive(Default, Deserialize)]
struct InstallationCounts {
    #[serde(default)]
    installed: u32,
    #[serde(default)]
    not_installed: u32,
    #[serde(default)]
    failed: u32,
}

#[derive(Default, Deserialize)]
struct StatusCounts {
    #[serde(default)]
    online: u32,
    #[serde(default)]
    busy: u32,
}

impl ToolStatsPayload {
    fn into_stats(self) -> Result<ToolStats, PayloadError> {
        if self.installation.is_some() || self.status.is_some() {
            let installation = self.installation.unwrap_or_default();
            let status = self.status.unwrap_or_default();
            return Ok(ToolStats {
                installed: installation.installed,
                not_installed: installation.not_installed,
                failed: installation.failed,
                online: status.online,
                busy: status.busy,
            });
        }
        let recognized = [
            self.installed,
            self.not_installed,
            self.failed,
            self.online,
            self.busy,
        ]
        .iter()
        .any(Option::is_some);
        if !recognized {
            return Err(PayloadError::Unrecognized);
        }
        Ok(ToolStats {
            installed: self.installed.unwrap_or_default(),
            not_installed: self.not_installed.unwrap_or_default(),
            failed: self.failed.unwrap_or_default(),
            online: self.online.unwrap_or_default(),
            busy: self.busy.unwrap_or_default(),
        })
    }
}

/// One scan result as delivered by `/scan-results`.
///
/// The record is kept opaque; accessors only peek at the handful of string
/// fields the shell displays.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ScanResultSummary(Value);

impl ScanResultSummary {
    /// Wrap a raw JSON record.
    #[must_use]
    pub const fn new(raw: Value) -> Self {
        Self(raw)
    }

    /// Backend identifier, when present.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.text_field("id")
    }

    /// Scanned target (domain or host), when present.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        self.text_field("target")
    }

    /// Name of the tool that produced the result, when present.
    #[must_use]
    pub fn tool_name(&self) -> Option<&str> {
        self.text_field("tool_name")
    }

    /// Free-form status label, when present.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.text_field("status")
    }

    /// Whether the scan is still queued or running.
    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.status().is_some_and(|status| {
            let status = status.trim();
            IN_FLIGHT_STATUSES
                .iter()
                .any(|candidate| status.eq_ignore_ascii_case(candidate))
        })
    }

    fn text_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}

/// Decode a `/scan-results` body, keeping the first `limit` entries in
/// response order.
///
/// # Errors
/// Returns [`PayloadError::NotAnArray`] when the body is not a JSON array.
pub fn decode_scan_results(
    value: Value,
    limit: usize,
) -> Result<Vec<ScanResultSummary>, PayloadError> {
    match value {
        Value::Array(items) => Ok(items
            .into_iter()
            .take(limit)
            .map(ScanResultSummary::new)
            .collect()),
        other => Err(PayloadError::NotAnArray {
            found: json_kind(&other),
        }),
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flat_stats_decode_exactly() {
        let stats = ToolStats::from_value(json!({
            "installed": 10,
            "not_installed": 2,
            "failed": 1,
            "online": 8,
            "busy": 3
        }))
        .expect("flat stats decode");
        assert_eq!(
            stats,
            ToolStats {
                installed: 10,
                not_installed: 2,
                failed: 1,
                online: 8,
                busy: 3,
            }
        );
    }

    #[test]
    fn grouped_backend_document_maps_to_flat_record() {
        let stats = ToolStats::from_value(json!({
            "installation": {"installed": 4, "not_installed": 50, "failed": 2, "outdated": 1},
            "status": {"online": 3, "busy": 1},
            "categories": {"port_scanning": 5}
        }))
        .expect("grouped stats decode");
        assert_eq!(
            stats,
            ToolStats {
                installed: 4,
                not_installed: 50,
                failed: 2,
                online: 3,
                busy: 1,
            }
        );
    }

    #[test]
    fn grouped_document_with_one_section_defaults_the_other() {
        let installation_only = ToolStats::from_value(json!({
            "installation": {"installed": 4, "failed": 1}
        }))
        .expect("installation-only stats decode");
        assert_eq!(
            installation_only,
            ToolStats {
                installed: 4,
                failed: 1,
                ..ToolStats::default()
            }
        );

        let status_only = ToolStats::from_value(json!({"status": {"busy": 2}}))
            .expect("status-only stats decode");
        assert_eq!(
            status_only,
            ToolStats {
                busy: 2,
                ..ToolStats::default()
            }
        );
    }

    #[test]
    fn partial_flat_record_defaults_missing_counts() {
        let stats = ToolStats::from_value(json!({"installed": 7, "extra": "ignored"}))
            .expect("partial stats decode");
        assert_eq!(stats.installed, 7);
        assert_eq!(stats.online, 0);
        assert_eq!(stats.busy, 0);
    }

    #[test]
    fn malformed_stats_are_rejected() {
        assert_eq!(
            ToolStats::from_value(json!([1, 2, 3])),
            Err(PayloadError::NotAnObject { found: "array" })
        );
        assert_eq!(
            ToolStats::from_value(json!({"detail": "Not Found"})),
            Err(PayloadError::Unrecognized)
        );
        assert!(matches!(
            ToolStats::from_value(json!({"installed": "ten"})),
            Err(PayloadError::InvalidCounts { .. })
        ));
        assert!(matches!(
            ToolStats::from_value(json!({"installed": -1})),
            Err(PayloadError::InvalidCounts { .. })
        ));
    }

    #[test]
    fn scan_results_keep_leading_window_in_order() {
        let body = json!([
            {"id": "a"}, {"id": "b"}, {"id": "c"}, {"id": "d"},
            {"id": "e"}, {"id": "f"}, {"id": "g"}
        ]);
        let scans = decode_scan_results(body, 5).expect("array decodes");
        let ids: Vec<_> = scans.iter().filter_map(ScanResultSummary::id).collect();
        assert_eq!(ids, ["a", "b", "c", "d", "e"]);

        let short = decode_scan_results(json!([{"id": "only"}]), 5).expect("array decodes");
        assert_eq!(short.len(), 1);
    }

    #[test]
    fn scan_results_reject_non_arrays() {
        assert_eq!(
            decode_scan_results(json!({"detail": "boom"}), 5),
            Err(PayloadError::NotAnArray { found: "object" })
        );
    }

    #[test]
    fn in_flight_status_matches_pending_and_running() {
        let running = ScanResultSummary::new(json!({"status": "Running"}));
        let pending = ScanResultSummary::new(json!({"status": "pending"}));
        let done = ScanResultSummary::new(json!({"status": "completed"}));
        let opaque = ScanResultSummary::new(json!("not-an-object"));
        assert!(running.is_in_flight());
        assert!(pending.is_in_flight());
        assert!(!done.is_in_flight());
        assert!(!opaque.is_in_flight());
        assert_eq!(opaque.target(), None);
    }
}
