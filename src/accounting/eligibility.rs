//! Eligibility classification for one employee's attendance.
//!
//! This module partitions the present members of an employee's family into
//! eligible and ineligible buckets against the employee's quota using
//! ordered greedy quota consumption.

use crate::models::{AttendanceRecord, Employee, MemberBreakdown};

/// The fixed priority order in which present members consume the quota:
/// employee, spouse, kid1, kid2, kid3. Others never consume quota and are
/// handled after this sequence. Changing this order changes which category
/// absorbs the quota when quota < present count, so it must stay an
/// explicit ordered sequence.
const QUOTA_PRIORITY: [MemberCategory; 5] = [
    MemberCategory::Employee,
    MemberCategory::Spouse,
    MemberCategory::Kid(0),
    MemberCategory::Kid(1),
    MemberCategory::Kid(2),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MemberCategory {
    Employee,
    Spouse,
    Kid(usize),
}

/// Per-employee output of the eligibility classifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EligibilityCounts {
    /// Present members attributed to the eligible quota.
    pub eligible: MemberBreakdown,
    /// Present members beyond the quota, plus all others.
    pub ineligible: MemberBreakdown,
    /// Total present people for this employee.
    pub present_head_count: u32,
    /// Total ineligible people present for this employee.
    pub ineligible_head_count: u32,
}

/// Resolves the effective name for a kid slot (0-based).
///
/// The name entered on the attendance record wins; the roster name is the
/// fallback. Returns `None` when neither yields a non-empty name after
/// trimming.
pub fn resolved_kid_name<'a>(
    employee: &'a Employee,
    record: &'a AttendanceRecord,
    slot: usize,
) -> Option<&'a str> {
    record.kid_names.named_slot(slot).or_else(|| {
        employee
            .kid_name(slot)
            .map(str::trim)
            .filter(|name| !name.is_empty())
    })
}

/// Classifies the present members of one employee into eligible and
/// ineligible counts.
///
/// Present members are visited in the fixed priority order employee,
/// spouse, kid1, kid2, kid3. While the employee is eligible and the quota
/// (`expected_count`) is not yet exhausted, each present member lands in
/// the eligible bucket and consumes one quota slot; after that they land
/// in the ineligible bucket. Others are processed last and are always
/// ineligible.
///
/// A kid flag whose resolved name is empty is not counted at all, and an
/// other without a name is ignored. A missing record produces all-zero
/// counts; the function never fails on malformed data.
///
/// # Examples
///
/// ```
/// use attendance_engine::accounting::classify_attendance;
/// use attendance_engine::models::{AttendanceRecord, Cluster, Employee, KidNames};
/// use chrono::Utc;
///
/// let employee = Employee {
///     emp_id: "EMP001".to_string(),
///     name: "Ravi Kumar".to_string(),
///     cluster: Cluster::Vijayawada,
///     eligibility: "Eligible".to_string(),
///     expected_count: 1,
///     kids: vec![],
/// };
/// let record = AttendanceRecord {
///     employee: true,
///     spouse: true,
///     kid1: false,
///     kid2: false,
///     kid3: false,
///     kid_names: KidNames::default(),
///     others: vec![],
///     marked_by: "vja1".to_string(),
///     marked_at: Utc::now(),
/// };
///
/// let counts = classify_attendance(&employee, Some(&record));
/// // Quota of 1: the employee is eligible, the spouse spills over.
/// assert_eq!(counts.eligible.employee, 1);
/// assert_eq!(counts.ineligible.spouse, 1);
/// assert_eq!(counts.present_head_count, 2);
/// ```
pub fn classify_attendance(
    employee: &Employee,
    record: Option<&AttendanceRecord>,
) -> EligibilityCounts {
    let mut counts = EligibilityCounts::default();

    let Some(record) = record else {
        return counts;
    };

    let is_eligible = employee.is_eligible();
    let quota = employee.expected_count;
    let mut eligible_count_used = 0;

    for category in QUOTA_PRIORITY {
        let present = match category {
            MemberCategory::Employee => record.employee,
            MemberCategory::Spouse => record.spouse,
            MemberCategory::Kid(slot) => {
                record.kid_flag(slot) && resolved_kid_name(employee, record, slot).is_some()
            }
        };
        if !present {
            continue;
        }

        counts.present_head_count += 1;
        let bucket = if is_eligible && eligible_count_used < quota {
            eligible_count_used += 1;
            &mut counts.eligible
        } else {
            counts.ineligible_head_count += 1;
            &mut counts.ineligible
        };
        match category {
            MemberCategory::Employee => bucket.employee += 1,
            MemberCategory::Spouse => bucket.spouse += 1,
            MemberCategory::Kid(_) => bucket.kids += 1,
        }
    }

    for other in &record.others {
        if other.is_named() {
            counts.present_head_count += 1;
            counts.ineligible_head_count += 1;
            counts.ineligible.others += 1;
        }
    }

    counts
}
