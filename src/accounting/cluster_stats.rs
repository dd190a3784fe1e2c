//! Cluster-level aggregation of classifier output.
//!
//! The aggregator folds per-employee eligibility counts into one
//! statistics record per cluster, and provides the simpler presence-rate
//! view used by the dashboard header. Both are pure functions over the
//! in-memory collection and are recomputed on each read.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{Cluster, ClusterAttendanceSummary, ClusterStats, EmployeeWithAttendance};

use super::eligibility::classify_attendance;

/// Aggregates attendance statistics per cluster.
///
/// Returns one [`ClusterStats`] per cluster in [`Cluster::ALL`] order,
/// zero-filled for clusters without employees. `total_employees` counts
/// every employee in the cluster regardless of check-in status, and
/// `total_expected_count` accrues the quota of eligible employees whether
/// or not they have checked in.
pub fn summarize_clusters(employees: &[EmployeeWithAttendance]) -> Vec<ClusterStats> {
    Cluster::ALL
        .iter()
        .map(|&cluster| {
            let mut stats = ClusterStats::empty(cluster);
            for entry in employees.iter().filter(|e| e.employee.cluster == cluster) {
                stats.total_employees += 1;
                if entry.employee.is_eligible() {
                    stats.total_expected_count += entry.employee.expected_count;
                }

                let counts =
                    classify_attendance(&entry.employee, entry.attendance_record.as_ref());
                stats.present_head_count += counts.present_head_count;
                stats.ineligible_head_count += counts.ineligible_head_count;
                stats.eligible_breakdown += counts.eligible;
                stats.ineligible_breakdown += counts.ineligible;
            }
            stats
        })
        .collect()
}

/// Computes the presence-rate view per cluster.
///
/// An employee counts as present when their record has at least one
/// present flag or any other entry. The rate is present/total as a
/// percentage rounded to 2 decimal places, and 0 for an empty cluster.
pub fn attendance_summaries(employees: &[EmployeeWithAttendance]) -> Vec<ClusterAttendanceSummary> {
    Cluster::ALL
        .iter()
        .map(|&cluster| {
            let mut total_employees = 0;
            let mut present_employees = 0;
            for entry in employees.iter().filter(|e| e.employee.cluster == cluster) {
                total_employees += 1;
                if entry
                    .attendance_record
                    .as_ref()
                    .is_some_and(|record| record.has_any_presence())
                {
                    present_employees += 1;
                }
            }

            ClusterAttendanceSummary {
                cluster,
                total_employees,
                present_employees,
                pending_employees: total_employees - present_employees,
                attendance_rate: attendance_rate(present_employees, total_employees),
            }
        })
        .collect()
}

fn attendance_rate(present: u32, total: u32) -> Decimal {
    if total == 0 {
        return Decimal::ZERO;
    }
    (Decimal::from(present) * Decimal::from(100) / Decimal::from(total))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
}
