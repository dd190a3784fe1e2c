//! Roster listing helpers: filter, search, sort, and kid-name merging.
//!
//! These back the kiosk employee list. All of them are non-mutating and
//! return fresh collections, leaving the store's ordering untouched.

use serde::{Deserialize, Serialize};

use crate::models::{Cluster, EmployeeWithAttendance, Kid, KidNames};

/// Check-in status of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    /// At least one family member has been marked present.
    Present,
    /// No attendance has been recorded yet.
    Pending,
}

/// Per-employee status summary for list rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSummary {
    /// Whether the employee has checked anyone in.
    pub status: AttendanceStatus,
    /// Raw count of present members on the record, zero when pending.
    pub present_count: u32,
}

/// Returns the employees belonging to one cluster.
pub fn filter_by_cluster(
    employees: &[EmployeeWithAttendance],
    cluster: Cluster,
) -> Vec<EmployeeWithAttendance> {
    employees
        .iter()
        .filter(|entry| entry.employee.cluster == cluster)
        .cloned()
        .collect()
}

/// Filters employees by a search term matching name or employee ID,
/// case-insensitively. An empty or whitespace-only term returns the input
/// unchanged.
pub fn filter_by_search(
    employees: &[EmployeeWithAttendance],
    search_term: &str,
) -> Vec<EmployeeWithAttendance> {
    if search_term.trim().is_empty() {
        return employees.to_vec();
    }

    let needle = search_term.to_lowercase();
    employees
        .iter()
        .filter(|entry| {
            entry.employee.name.to_lowercase().contains(&needle)
                || entry.employee.emp_id.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Returns the employees sorted by name. The sort is stable, so employees
/// with equal names keep their roster order.
pub fn sort_by_name(employees: &[EmployeeWithAttendance]) -> Vec<EmployeeWithAttendance> {
    let mut sorted = employees.to_vec();
    sorted.sort_by(|a, b| a.employee.name.cmp(&b.employee.name));
    sorted
}

/// Returns the employees sorted by employee ID. Stable, like
/// [`sort_by_name`].
pub fn sort_by_emp_id(employees: &[EmployeeWithAttendance]) -> Vec<EmployeeWithAttendance> {
    let mut sorted = employees.to_vec();
    sorted.sort_by(|a, b| a.employee.emp_id.cmp(&b.employee.emp_id));
    sorted
}

/// Computes the present/pending summary for one list row.
pub fn attendance_status(entry: &EmployeeWithAttendance) -> StatusSummary {
    match &entry.attendance_record {
        Some(record) => {
            let present_count = record.present_member_count();
            StatusSummary {
                status: if present_count > 0 {
                    AttendanceStatus::Present
                } else {
                    AttendanceStatus::Pending
                },
                present_count,
            }
        }
        None => StatusSummary {
            status: AttendanceStatus::Pending,
            present_count: 0,
        },
    }
}

/// Folds kiosk-entered kid names back into the roster.
///
/// Returns the updated kid list when any name was added or changed, or
/// `None` when the roster already matches. Existing entries keep their
/// age bracket; slots created for a newly named kid get `"Unknown"`.
pub fn merge_kid_names(kids: &[Kid], kid_names: &KidNames) -> Option<Vec<Kid>> {
    let mut updated = kids.to_vec();
    let mut changed = false;

    for slot in 0..3 {
        let Some(name) = kid_names.named_slot(slot) else {
            continue;
        };
        while updated.len() <= slot {
            updated.push(Kid {
                name: String::new(),
                age_bracket: "Unknown".to_string(),
            });
        }
        if updated[slot].name != name {
            updated[slot].name = name.to_string();
            changed = true;
        }
    }

    changed.then_some(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttendanceRecord, Employee};
    use chrono::Utc;

    fn create_entry(emp_id: &str, name: &str, cluster: Cluster) -> EmployeeWithAttendance {
        EmployeeWithAttendance {
            employee: Employee {
                emp_id: emp_id.to_string(),
                name: name.to_string(),
                cluster,
                eligibility: "Eligible".to_string(),
                expected_count: 2,
                kids: vec![],
            },
            attendance_record: None,
        }
    }

    fn create_record(employee_flag: bool) -> AttendanceRecord {
        AttendanceRecord {
            employee: employee_flag,
            spouse: false,
            kid1: false,
            kid2: false,
            kid3: false,
            kid_names: KidNames::default(),
            others: vec![],
            marked_by: "vja1".to_string(),
            marked_at: Utc::now(),
        }
    }

    fn sample_roster() -> Vec<EmployeeWithAttendance> {
        vec![
            create_entry("EMP003", "Ravi Kumar", Cluster::Vijayawada),
            create_entry("EMP001", "Sita Devi", Cluster::Nellore),
            create_entry("EMP002", "Anand Rao", Cluster::Vijayawada),
        ]
    }

    #[test]
    fn test_filter_by_cluster() {
        let filtered = filter_by_cluster(&sample_roster(), Cluster::Vijayawada);
        assert_eq!(filtered.len(), 2);
        assert!(
            filtered
                .iter()
                .all(|e| e.employee.cluster == Cluster::Vijayawada)
        );
    }

    #[test]
    fn test_empty_search_term_is_identity() {
        let roster = sample_roster();
        assert_eq!(filter_by_search(&roster, ""), roster);
        assert_eq!(filter_by_search(&roster, "   "), roster);
    }

    #[test]
    fn test_search_matches_name_case_insensitively() {
        let results = filter_by_search(&sample_roster(), "ravi");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].employee.emp_id, "EMP003");
    }

    #[test]
    fn test_search_matches_emp_id() {
        let results = filter_by_search(&sample_roster(), "emp001");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].employee.name, "Sita Devi");
    }

    #[test]
    fn test_search_with_no_match_returns_empty() {
        assert!(filter_by_search(&sample_roster(), "zzz").is_empty());
    }

    #[test]
    fn test_sort_by_name_orders_and_preserves_input() {
        let roster = sample_roster();
        let sorted = sort_by_name(&roster);
        let names: Vec<&str> = sorted.iter().map(|e| e.employee.name.as_str()).collect();
        assert_eq!(names, vec!["Anand Rao", "Ravi Kumar", "Sita Devi"]);
        // input untouched
        assert_eq!(roster[0].employee.emp_id, "EMP003");
    }

    #[test]
    fn test_sort_by_emp_id_is_total_over_input() {
        let sorted = sort_by_emp_id(&sample_roster());
        let ids: Vec<&str> = sorted.iter().map(|e| e.employee.emp_id.as_str()).collect();
        assert_eq!(ids, vec!["EMP001", "EMP002", "EMP003"]);
        assert_eq!(sorted.len(), 3);
    }

    #[test]
    fn test_sort_by_name_is_stable_for_equal_names() {
        let mut roster = sample_roster();
        roster[0].employee.name = "Same Name".to_string();
        roster[2].employee.name = "Same Name".to_string();
        let sorted = sort_by_name(&roster);
        // EMP003 came before EMP002 in the input and must stay first
        assert_eq!(sorted[1].employee.emp_id, "EMP003");
        assert_eq!(sorted[2].employee.emp_id, "EMP002");
    }

    #[test]
    fn test_attendance_status_pending_without_record() {
        let entry = create_entry("EMP001", "Ravi", Cluster::Nellore);
        let summary = attendance_status(&entry);
        assert_eq!(summary.status, AttendanceStatus::Pending);
        assert_eq!(summary.present_count, 0);
    }

    #[test]
    fn test_attendance_status_present_with_marked_record() {
        let mut entry = create_entry("EMP001", "Ravi", Cluster::Nellore);
        entry.attendance_record = Some(create_record(true));
        let summary = attendance_status(&entry);
        assert_eq!(summary.status, AttendanceStatus::Present);
        assert_eq!(summary.present_count, 1);
    }

    #[test]
    fn test_attendance_status_pending_with_empty_record() {
        let mut entry = create_entry("EMP001", "Ravi", Cluster::Nellore);
        entry.attendance_record = Some(create_record(false));
        let summary = attendance_status(&entry);
        assert_eq!(summary.status, AttendanceStatus::Pending);
    }

    #[test]
    fn test_merge_kid_names_no_change_returns_none() {
        let kids = vec![Kid {
            name: "Anu".to_string(),
            age_bracket: "5-10".to_string(),
        }];
        let names = KidNames {
            kid1: Some("Anu".to_string()),
            kid2: None,
            kid3: None,
        };
        assert_eq!(merge_kid_names(&kids, &names), None);
    }

    #[test]
    fn test_merge_kid_names_updates_existing_slot_keeping_age_bracket() {
        let kids = vec![Kid {
            name: "Anu".to_string(),
            age_bracket: "5-10".to_string(),
        }];
        let names = KidNames {
            kid1: Some("Anusha".to_string()),
            kid2: None,
            kid3: None,
        };
        let updated = merge_kid_names(&kids, &names).unwrap();
        assert_eq!(updated[0].name, "Anusha");
        assert_eq!(updated[0].age_bracket, "5-10");
    }

    #[test]
    fn test_merge_kid_names_extends_roster_with_unknown_bracket() {
        let kids = vec![Kid {
            name: "Anu".to_string(),
            age_bracket: "5-10".to_string(),
        }];
        let names = KidNames {
            kid1: None,
            kid2: Some("Vikram".to_string()),
            kid3: None,
        };
        let updated = merge_kid_names(&kids, &names).unwrap();
        assert_eq!(updated.len(), 2);
        assert_eq!(updated[1].name, "Vikram");
        assert_eq!(updated[1].age_bracket, "Unknown");
    }

    #[test]
    fn test_merge_kid_names_ignores_blank_entries() {
        let kids: Vec<Kid> = vec![];
        let names = KidNames {
            kid1: Some("  ".to_string()),
            kid2: None,
            kid3: None,
        };
        assert_eq!(merge_kid_names(&kids, &names), None);
    }
}
