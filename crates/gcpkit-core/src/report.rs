//! Structured result reported to callers.

use crate::geometry::GcpPoint;
use crate::pipeline::GcpSelection;
use serde::{Deserialize, Serialize};

/// Whether a processing run produced GCPs or failed softly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    /// GCPs were selected.
    Success,
    /// The input could not be processed (missing document, empty boundary).
    Error,
}

/// The structured result of processing a surveyed-area archive.
///
/// Soft failures (no embedded document, no boundary coordinates) surface
/// here with [`ReportStatus::Error`]; fatal failures such as degenerate
/// geometry propagate as errors instead and never become a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GcpReport {
    /// Success or soft error.
    pub status: ReportStatus,
    /// Human-readable summary.
    pub message: String,
    /// Selected GCPs, empty on error.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gcp_points: Vec<GcpPoint>,
    /// The count the policy asked for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_count: Option<usize>,
    /// The count actually selected; see `GcpSelection::achieved_count`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achieved_count: Option<usize>,
}

impl GcpReport {
    /// Build a success report from a completed selection.
    pub fn success(message: impl Into<String>, selection: &GcpSelection) -> Self {
        Self {
            status: ReportStatus::Success,
            message: message.into(),
            gcp_points: selection.gcp_points.clone(),
            target_count: Some(selection.target_count),
            achieved_count: Some(selection.achieved_count()),
        }
    }

    /// Build a soft error report.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ReportStatus::Error,
            message: message.into(),
            gcp_points: Vec::new(),
            target_count: None,
            achieved_count: None,
        }
    }

    /// Whether this report carries selected GCPs.
    pub fn is_success(&self) -> bool {
        self.status == ReportStatus::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_report_serialization() {
        let report = GcpReport::error("No KML file found in KMZ");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["message"], "No KML file found in KMZ");
        // Empty and absent fields are omitted entirely
        assert!(json.get("gcp_points").is_none());
        assert!(json.get("target_count").is_none());
    }

    #[test]
    fn test_report_round_trip() {
        let selection = GcpSelection {
            gcp_points: vec![GcpPoint {
                lon: 1.0,
                lat: 2.0,
                elevation: 3.0,
            }],
            target_count: 5,
            area_size: 0.0,
            terrain_complexity: 0.0,
            triangle_count: 1,
        };
        let report = GcpReport::success("Processed area.kmz", &selection);
        let json = serde_json::to_string(&report).unwrap();
        let parsed: GcpReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
        assert!(parsed.is_success());
        assert_eq!(parsed.achieved_count, Some(1));
    }
}
