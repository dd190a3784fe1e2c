//! Cluster statistics models.
//!
//! These are derived values, recomputed on demand from the full
//! employee-with-attendance collection. Nothing here is persisted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Cluster;

/// Present-member counts split by family category.
///
/// Used twice per cluster: once for members attributed to the eligible
/// quota and once for everyone else. The `others` field of an eligible
/// breakdown is always zero because others never consume quota.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberBreakdown {
    /// Present employees.
    pub employee: u32,
    /// Present spouses.
    pub spouse: u32,
    /// Present kids across all three slots.
    pub kids: u32,
    /// Present additional family members.
    pub others: u32,
}

impl MemberBreakdown {
    /// Total members in this breakdown.
    pub fn sum(&self) -> u32 {
        self.employee + self.spouse + self.kids + self.others
    }
}

impl std::ops::AddAssign for MemberBreakdown {
    fn add_assign(&mut self, rhs: Self) {
        self.employee += rhs.employee;
        self.spouse += rhs.spouse;
        self.kids += rhs.kids;
        self.others += rhs.others;
    }
}

/// Aggregated attendance statistics for one cluster.
///
/// Invariants maintained by the aggregator:
/// `present_head_count == eligible_breakdown.sum() + ineligible_breakdown.sum()`
/// and `eligible_breakdown.others == 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterStats {
    /// The cluster these statistics describe.
    pub cluster: Cluster,
    /// Count of employees in the cluster, regardless of check-in status.
    pub total_employees: u32,
    /// Sum of `expected_count` over eligible employees only, independent
    /// of whether they have checked in.
    pub total_expected_count: u32,
    /// Total present people, eligible and ineligible alike.
    pub present_head_count: u32,
    /// Total ineligible people present.
    pub ineligible_head_count: u32,
    /// Present members attributed to the eligible quota.
    pub eligible_breakdown: MemberBreakdown,
    /// Present members outside the quota, plus all others.
    pub ineligible_breakdown: MemberBreakdown,
}

impl ClusterStats {
    /// A zero-filled statistics record for an empty cluster.
    pub fn empty(cluster: Cluster) -> Self {
        Self {
            cluster,
            total_employees: 0,
            total_expected_count: 0,
            present_head_count: 0,
            ineligible_head_count: 0,
            eligible_breakdown: MemberBreakdown::default(),
            ineligible_breakdown: MemberBreakdown::default(),
        }
    }
}

/// The simpler presence-rate view of a cluster for the dashboard header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterAttendanceSummary {
    /// The cluster this summary describes.
    pub cluster: Cluster,
    /// Count of employees in the cluster.
    pub total_employees: u32,
    /// Employees whose record has at least one present flag or other.
    pub present_employees: u32,
    /// Employees yet to check in (total minus present).
    pub pending_employees: u32,
    /// Present over total as a percentage, rounded to 2 decimal places.
    /// Zero when the cluster has no employees.
    pub attendance_rate: Decimal,
}
