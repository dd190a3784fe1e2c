//! In-memory attendance store.

use std::sync::RwLock;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, Cluster, Employee, EmployeeWithAttendance, Kid};

use super::AttendanceStore;

/// An [`AttendanceStore`] backed by an in-process `RwLock`.
///
/// Entries keep roster insertion order so listings are deterministic.
/// Suitable for a single kiosk process and for tests.
pub struct MemoryStore {
    entries: RwLock<Vec<EmployeeWithAttendance>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Creates a store pre-populated with a roster, none checked in.
    pub fn with_roster(employees: Vec<Employee>) -> Self {
        Self {
            entries: RwLock::new(
                employees
                    .into_iter()
                    .map(|employee| EmployeeWithAttendance {
                        employee,
                        attendance_record: None,
                    })
                    .collect(),
            ),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned() -> EngineError {
    EngineError::Persistence {
        message: "store lock poisoned".to_string(),
    }
}

impl AttendanceStore for MemoryStore {
    fn get_employees(&self, cluster: Option<Cluster>) -> EngineResult<Vec<EmployeeWithAttendance>> {
        let entries = self.entries.read().map_err(|_| poisoned())?;
        Ok(entries
            .iter()
            .filter(|entry| cluster.is_none_or(|c| entry.employee.cluster == c))
            .cloned()
            .collect())
    }

    fn get_employee(&self, emp_id: &str) -> EngineResult<Option<EmployeeWithAttendance>> {
        let entries = self.entries.read().map_err(|_| poisoned())?;
        Ok(entries
            .iter()
            .find(|entry| entry.employee.emp_id == emp_id)
            .cloned())
    }

    fn save_attendance_record(
        &self,
        emp_id: &str,
        record: AttendanceRecord,
        cluster: Cluster,
    ) -> EngineResult<()> {
        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        let entry = entries
            .iter_mut()
            .find(|entry| entry.employee.emp_id == emp_id && entry.employee.cluster == cluster)
            .ok_or_else(|| EngineError::EmployeeNotFound {
                emp_id: emp_id.to_string(),
            })?;
        entry.attendance_record = Some(record);
        Ok(())
    }

    fn update_employee_children(&self, emp_id: &str, kids: Vec<Kid>) -> EngineResult<()> {
        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        let entry = entries
            .iter_mut()
            .find(|entry| entry.employee.emp_id == emp_id)
            .ok_or_else(|| EngineError::EmployeeNotFound {
                emp_id: emp_id.to_string(),
            })?;
        entry.employee.kids = kids;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::KidNames;
    use chrono::Utc;

    fn create_employee(emp_id: &str, cluster: Cluster) -> Employee {
        Employee {
            emp_id: emp_id.to_string(),
            name: format!("Employee {emp_id}"),
            cluster,
            eligibility: "Eligible".to_string(),
            expected_count: 2,
            kids: vec![],
        }
    }

    fn create_record() -> AttendanceRecord {
        AttendanceRecord {
            employee: true,
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

    fn seeded_store() -> MemoryStore {
        MemoryStore::with_roster(vec![
            create_employee("EMP001", Cluster::Vijayawada),
            create_employee("EMP002", Cluster::Nellore),
            create_employee("EMP003", Cluster::Vijayawada),
        ])
    }

    #[test]
    fn test_get_employees_preserves_roster_order() {
        let store = seeded_store();
        let all = store.get_employees(None).unwrap();
        let ids: Vec<&str> = all.iter().map(|e| e.employee.emp_id.as_str()).collect();
        assert_eq!(ids, vec!["EMP001", "EMP002", "EMP003"]);
    }

    #[test]
    fn test_get_employees_filters_by_cluster() {
        let store = seeded_store();
        let vijayawada = store.get_employees(Some(Cluster::Vijayawada)).unwrap();
        assert_eq!(vijayawada.len(), 2);
        let nellore = store.get_employees(Some(Cluster::Nellore)).unwrap();
        assert_eq!(nellore.len(), 1);
        let visakhapatnam = store.get_employees(Some(Cluster::Visakhapatnam)).unwrap();
        assert!(visakhapatnam.is_empty());
    }

    #[test]
    fn test_get_employee_by_id() {
        let store = seeded_store();
        let entry = store.get_employee("EMP002").unwrap().unwrap();
        assert_eq!(entry.employee.cluster, Cluster::Nellore);
        assert!(store.get_employee("EMP999").unwrap().is_none());
    }

    #[test]
    fn test_save_attendance_record_replaces_whole_record() {
        let store = seeded_store();
        store
            .save_attendance_record("EMP001", create_record(), Cluster::Vijayawada)
            .unwrap();

        let mut second = create_record();
        second.employee = false;
        second.spouse = true;
        store
            .save_attendance_record("EMP001", second, Cluster::Vijayawada)
            .unwrap();

        let entry = store.get_employee("EMP001").unwrap().unwrap();
        let record = entry.attendance_record.unwrap();
        assert!(!record.employee);
        assert!(record.spouse);
    }

    #[test]
    fn test_save_for_unknown_employee_fails() {
        let store = seeded_store();
        let err = store
            .save_attendance_record("EMP999", create_record(), Cluster::Nellore)
            .unwrap_err();
        assert!(matches!(err, EngineError::EmployeeNotFound { .. }));
    }

    #[test]
    fn test_save_with_mismatched_cluster_fails() {
        let store = seeded_store();
        let err = store
            .save_attendance_record("EMP001", create_record(), Cluster::Nellore)
            .unwrap_err();
        assert!(matches!(err, EngineError::EmployeeNotFound { .. }));
    }

    #[test]
    fn test_update_employee_children() {
        let store = seeded_store();
        store
            .update_employee_children(
                "EMP001",
                vec![Kid {
                    name: "Anu".to_string(),
                    age_bracket: "5-10".to_string(),
                }],
            )
            .unwrap();
        let entry = store.get_employee("EMP001").unwrap().unwrap();
        assert_eq!(entry.employee.kids.len(), 1);
        assert_eq!(entry.employee.kids[0].name, "Anu");
    }
}
