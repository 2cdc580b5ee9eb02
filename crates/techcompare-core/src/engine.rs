//! # Build Evaluation Engine
//!
//! Pure functions over a [`Build`]:
//! - `total_price`: sum of occupied-slot prices
//! - `total_power_draw`: sum of occupied-slot TDP values
//! - `check_compatibility`: socket and PSU headroom rules
//!
//! Every function is total, deterministic and side-effect free. Absent fields
//! contribute nothing; no field is assumed present because of a part's category.
//!
//! ## Rule Order
//!
//! Issues are reported in a fixed order: the socket rule first, the power rule
//! second. The list is shown verbatim to end users.

use crate::Build;
use crate::primitives::PSU_HEADROOM_WATTS;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// AGGREGATES
// =============================================================================

/// Sum of the prices of every occupied slot. An empty build costs 0.
#[must_use]
pub fn total_price(build: &Build) -> u64 {
    build
        .parts()
        .fold(0u64, |total, part| total.saturating_add(part.price))
}

/// Sum of the TDP of every occupied slot, in watts.
///
/// All eight slots count, including storage, RAM, case and the PSU itself.
/// Parts without a TDP contribute 0.
#[must_use]
pub fn total_power_draw(build: &Build) -> u64 {
    build.parts().fold(0u64, |total, part| {
        total.saturating_add(part.tdp.map_or(0, u64::from))
    })
}

// =============================================================================
// COMPATIBILITY
// =============================================================================

/// A single compatibility problem found in a build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CompatibilityIssue {
    /// CPU and motherboard sockets differ. `None` means the part has no socket
    /// tag and renders as `unknown` in the user-facing message.
    SocketMismatch {
        cpu: Option<String>,
        motherboard: Option<String>,
    },
    /// The PSU rating is below the estimated draw plus the headroom margin.
    InsufficientPower {
        wattage: u32,
        estimated: u64,
        overhead: u64,
    },
}

impl fmt::Display for CompatibilityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompatibilityIssue::SocketMismatch { cpu, motherboard } => write!(
                f,
                "CPU socket ({}) mismatch with Motherboard socket ({})",
                cpu.as_deref().unwrap_or("unknown"),
                motherboard.as_deref().unwrap_or("unknown")
            ),
            CompatibilityIssue::InsufficientPower {
                wattage,
                estimated,
                overhead,
            } => write!(
                f,
                "PSU wattage ({}W) may be insufficient for build (estimated {}W + {}W overhead)",
                wattage, estimated, overhead
            ),
        }
    }
}

/// Outcome of [`check_compatibility`].
///
/// `compatible` is true iff `issues` is empty. On the wire `issues` holds the
/// rendered messages and `details` the structured issues.
///
/// Reading a report back uses `details` only and requires it; `compatible` and
/// the message strings are derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "ReportWire", from = "ReportWire")]
pub struct CompatibilityReport {
    pub compatible: bool,
    pub issues: Vec<CompatibilityIssue>,
}

#[derive(Serialize, Deserialize)]
struct ReportWire {
    compatible: bool,
    #[serde(default)]
    issues: Vec<String>,
    details: Vec<CompatibilityIssue>,
}

impl From<CompatibilityReport> for ReportWire {
    fn from(report: CompatibilityReport) -> Self {
        Self {
            compatible: report.compatible,
            issues: report.messages(),
            details: report.issues,
        }
    }
}

impl From<ReportWire> for CompatibilityReport {
    fn from(wire: ReportWire) -> Self {
        Self::from_issues(wire.details)
    }
}

impl CompatibilityReport {
    fn from_issues(issues: Vec<CompatibilityIssue>) -> Self {
        Self {
            compatible: issues.is_empty(),
            issues,
        }
    }

    /// The user-visible issue descriptions, in evaluation order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }
}

/// Evaluate the compatibility rules against a build.
///
/// 1. Socket match: only when both CPU and motherboard are present; sockets
///    must be exactly equal (case-sensitive).
/// 2. Power headroom: only when a PSU with a non-zero wattage is present; fails
///    when `wattage < total_power_draw + PSU_HEADROOM_WATTS`.
///
/// Empty slots never produce issues. A PSU without a wattage rating, or rated
/// at 0 W, skips rule 2 entirely.
#[must_use]
pub fn check_compatibility(build: &Build) -> CompatibilityReport {
    let mut issues = Vec::new();

    if let (Some(cpu), Some(motherboard)) = (build.cpu(), build.motherboard()) {
        if cpu.socket != motherboard.socket {
            issues.push(CompatibilityIssue::SocketMismatch {
                cpu: cpu.socket.clone(),
                motherboard: motherboard.socket.clone(),
            });
        }
    }

    if let Some(wattage) = build.psu().and_then(|psu| psu.wattage).filter(|w| *w > 0) {
        let estimated = total_power_draw(build);
        if u64::from(wattage) < estimated.saturating_add(PSU_HEADROOM_WATTS) {
            issues.push(CompatibilityIssue::InsufficientPower {
                wattage,
                estimated,
                overhead: PSU_HEADROOM_WATTS,
            });
        }
    }

    CompatibilityReport::from_issues(issues)
}

// =============================================================================
// SUMMARIES
// =============================================================================

/// Derived metrics of one build, computed together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSummary {
    pub build_id: String,
    pub name: String,
    pub total_price: u64,
    pub total_power_draw: u64,
    pub occupied_slots: usize,
    pub complete: bool,
    pub compatibility: CompatibilityReport,
}

impl BuildSummary {
    /// Run every evaluation over a build.
    #[must_use]
    pub fn evaluate(build: &Build) -> Self {
        Self {
            build_id: build.id.clone(),
            name: build.name.clone(),
            total_price: total_price(build),
            total_power_draw: total_power_draw(build),
            occupied_slots: build.occupied_count(),
            complete: build.is_complete(),
            compatibility: check_compatibility(build),
        }
    }
}

/// Side-by-side evaluation of two builds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildComparison {
    pub a: BuildSummary,
    pub b: BuildSummary,
    /// Absolute price difference.
    pub price_delta: u64,
    /// Absolute power draw difference, in watts.
    pub power_delta: u64,
}

impl BuildComparison {
    #[must_use]
    pub fn between(a: &Build, b: &Build) -> Self {
        let a = BuildSummary::evaluate(a);
        let b = BuildSummary::evaluate(b);
        Self {
            price_delta: a.total_price.abs_diff(b.total_price),
            power_delta: a.total_power_draw.abs_diff(b.total_power_draw),
            a,
            b,
        }
    }

    /// Id of the cheaper build, `None` on a tie.
    #[must_use]
    pub fn cheaper(&self) -> Option<&str> {
        match self.a.total_price.cmp(&self.b.total_price) {
            std::cmp::Ordering::Less => Some(&self.a.build_id),
            std::cmp::Ordering::Greater => Some(&self.b.build_id),
            std::cmp::Ordering::Equal => None,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Part, PartCategory};

    fn cpu(socket: &str, tdp: u32, price: u64) -> Part {
        Part::new("cpu", "CPU", PartCategory::Cpu, price)
            .with_tdp(tdp)
            .with_socket(socket)
    }

    fn board(socket: &str, price: u64) -> Part {
        Part::new("mobo", "Board", PartCategory::Motherboard, price).with_socket(socket)
    }

    fn psu(wattage: u32, price: u64) -> Part {
        Part::new("psu", "PSU", PartCategory::Psu, price).with_wattage(wattage)
    }

    #[test]
    fn empty_build_totals_are_zero() {
        let build = Build::new("b", "B");
        assert_eq!(total_price(&build), 0);
        assert_eq!(total_power_draw(&build), 0);
    }

    #[test]
    fn power_draw_skips_parts_without_tdp() {
        let build = Build::with_parts(
            "b",
            "B",
            [
                cpu("AM5", 120, 1),
                Part::new("case", "Case", PartCategory::Case, 1),
                Part::new("ram", "RAM", PartCategory::Ram, 1).with_tdp(5),
            ],
        );
        assert_eq!(total_power_draw(&build), 125);
    }

    #[test]
    fn power_draw_counts_psu_tdp() {
        let build = Build::with_parts(
            "b",
            "B",
            [psu(650, 1).with_tdp(20), cpu("AM5", 100, 1)],
        );
        assert_eq!(total_power_draw(&build), 120);
    }

    #[test]
    fn empty_build_is_compatible() {
        let report = check_compatibility(&Build::new("b", "B"));
        assert!(report.compatible);
        assert!(report.issues.is_empty());
    }

    #[test]
    fn cpu_without_motherboard_is_compatible() {
        let build = Build::with_parts("b", "B", [cpu("AM5", 120, 1)]);
        assert!(check_compatibility(&build).compatible);
    }

    #[test]
    fn socket_comparison_is_case_sensitive() {
        let build = Build::with_parts("b", "B", [cpu("AM5", 120, 1), board("am5", 1)]);
        let report = check_compatibility(&build);
        assert!(!report.compatible);
        assert_eq!(
            report.messages(),
            vec!["CPU socket (AM5) mismatch with Motherboard socket (am5)".to_string()]
        );
    }

    #[test]
    fn missing_socket_on_one_side_is_a_mismatch() {
        let bare_board = Part::new("mobo", "Board", PartCategory::Motherboard, 1);
        let build = Build::with_parts("b", "B", [cpu("AM5", 120, 1), bare_board]);
        let report = check_compatibility(&build);
        assert_eq!(
            report.messages(),
            vec!["CPU socket (AM5) mismatch with Motherboard socket (unknown)".to_string()]
        );
    }

    #[test]
    fn missing_socket_on_both_sides_matches() {
        let build = Build::with_parts(
            "b",
            "B",
            [
                Part::new("cpu", "CPU", PartCategory::Cpu, 1),
                Part::new("mobo", "Board", PartCategory::Motherboard, 1),
            ],
        );
        assert!(check_compatibility(&build).compatible);
    }

    #[test]
    fn psu_exactly_at_headroom_is_compatible() {
        let build = Build::with_parts("b", "B", [cpu("AM5", 120, 1), psu(220, 1)]);
        assert!(check_compatibility(&build).compatible);
    }

    #[test]
    fn psu_one_watt_short_is_flagged() {
        let build = Build::with_parts("b", "B", [cpu("AM5", 120, 1), psu(219, 1)]);
        let report = check_compatibility(&build);
        assert!(!report.compatible);
        assert_eq!(
            report.issues,
            vec![CompatibilityIssue::InsufficientPower {
                wattage: 219,
                estimated: 120,
                overhead: 100,
            }]
        );
        assert_eq!(
            report.messages()[0],
            "PSU wattage (219W) may be insufficient for build (estimated 120W + 100W overhead)"
        );
    }

    #[test]
    fn psu_without_wattage_is_never_checked() {
        let unrated = Part::new("psu", "PSU", PartCategory::Psu, 1);
        let hungry = Part::new("gpu", "GPU", PartCategory::Gpu, 1).with_tdp(5000);
        let build = Build::with_parts("b", "B", [unrated, hungry]);
        assert!(check_compatibility(&build).compatible);
    }

    #[test]
    fn zero_wattage_psu_is_treated_as_unrated() {
        let hungry = Part::new("gpu", "GPU", PartCategory::Gpu, 1).with_tdp(450);
        let build = Build::with_parts("b", "B", [psu(0, 1), hungry]);
        let report = check_compatibility(&build);
        assert!(report.compatible);
        assert!(report.messages().is_empty());
    }

    #[test]
    fn socket_issue_precedes_power_issue() {
        let build = Build::with_parts(
            "b",
            "B",
            [cpu("AM5", 300, 1), board("LGA1700", 1), psu(350, 1)],
        );
        let report = check_compatibility(&build);
        assert_eq!(report.issues.len(), 2);
        assert!(matches!(
            report.issues[0],
            CompatibilityIssue::SocketMismatch { .. }
        ));
        assert!(matches!(
            report.issues[1],
            CompatibilityIssue::InsufficientPower { .. }
        ));
    }

    #[test]
    fn summary_collects_all_metrics() {
        let build = Build::with_parts(
            "build-a",
            "A",
            [cpu("AM5", 120, 38500), board("AM5", 21500), psu(650, 4800)],
        );
        let summary = BuildSummary::evaluate(&build);
        assert_eq!(summary.total_price, 64800);
        assert_eq!(summary.total_power_draw, 120);
        assert_eq!(summary.occupied_slots, 3);
        assert!(!summary.complete);
        assert!(summary.compatibility.compatible);
    }

    #[test]
    fn comparison_reports_absolute_deltas() {
        let a = Build::with_parts("build-a", "A", [cpu("AM5", 120, 38500)]);
        let b = Build::with_parts("build-b", "B", [cpu("AM5", 65, 18500), psu(650, 4800)]);

        let cmp = BuildComparison::between(&a, &b);
        assert_eq!(cmp.price_delta, 15200);
        assert_eq!(cmp.power_delta, 55);
        assert_eq!(cmp.cheaper(), Some("build-b"));

        let tie = BuildComparison::between(&a, &a);
        assert_eq!(tie.price_delta, 0);
        assert_eq!(tie.cheaper(), None);
    }

    #[test]
    fn report_serializes_messages_and_details() {
        let build = Build::with_parts("b", "B", [cpu("AM5", 65, 1), board("LGA1700", 1)]);
        let report = check_compatibility(&build);
        let json = serde_json::to_value(&report).expect("serialize");

        assert_eq!(json["compatible"], false);
        assert_eq!(
            json["issues"][0],
            "CPU socket (AM5) mismatch with Motherboard socket (LGA1700)"
        );
        assert_eq!(json["details"][0]["kind"], "socket_mismatch");

        let back: CompatibilityReport = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, report);
    }

    #[test]
    fn report_without_details_is_rejected() {
        let json = serde_json::json!({
            "compatible": true,
            "issues": ["CPU socket (AM5) mismatch with Motherboard socket (LGA1700)"]
        });
        assert!(serde_json::from_value::<CompatibilityReport>(json).is_err());

        let stale = serde_json::json!({"compatible": false, "issues": [], "details": []});
        let report: CompatibilityReport = serde_json::from_value(stale).expect("deserialize");
        assert!(report.compatible);
    }
}
