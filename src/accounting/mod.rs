//! Accounting logic for the Attendance Engine.
//!
//! This module contains the eligibility classifier that partitions present
//! family members against each employee's quota, the cluster aggregator
//! that folds classifier output into per-city statistics, the token delta
//! calculator used when a record is edited, save validation, and the
//! roster listing helpers.

mod cluster_stats;
mod eligibility;
mod roster;
mod token_delta;
mod validation;

pub use cluster_stats::{attendance_summaries, summarize_clusters};
pub use eligibility::{EligibilityCounts, classify_attendance, resolved_kid_name};
pub use roster::{
    AttendanceStatus, StatusSummary, attendance_status, filter_by_cluster, filter_by_search,
    merge_kid_names, sort_by_emp_id, sort_by_name,
};
pub use token_delta::{TokenAction, TokenDelta, compute_token_delta};
pub use validation::validate_record;
