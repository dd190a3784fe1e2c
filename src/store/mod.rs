//! Record store collaborators.
//!
//! The engine is pure; everything that persists employees and attendance
//! records sits behind the [`AttendanceStore`] trait. The crate ships an
//! in-memory implementation used by the API and by tests; a database-backed
//! store only needs to implement the same trait.

mod memory;

pub use memory::MemoryStore;

use crate::error::EngineResult;
use crate::models::{AttendanceRecord, Cluster, EmployeeWithAttendance, Kid};

/// Read/write-by-key access to employees and their attendance records.
///
/// Saving a record replaces the prior one wholesale; there is no partial
/// patch and no history. Callers that need the previous snapshot (for
/// token delta computation) must read it before saving. Concurrent saves
/// for the same employee are last-write-wins.
pub trait AttendanceStore: Send + Sync {
    /// Lists employees with their attendance records, optionally filtered
    /// to one cluster. Ordering is the roster order and is stable across
    /// calls.
    fn get_employees(&self, cluster: Option<Cluster>) -> EngineResult<Vec<EmployeeWithAttendance>>;

    /// Fetches a single employee by ID, or `None` if no such employee.
    fn get_employee(&self, emp_id: &str) -> EngineResult<Option<EmployeeWithAttendance>>;

    /// Saves (replaces) the attendance record for an employee.
    fn save_attendance_record(
        &self,
        emp_id: &str,
        record: AttendanceRecord,
        cluster: Cluster,
    ) -> EngineResult<()>;

    /// Replaces the employee's kid roster.
    fn update_employee_children(&self, emp_id: &str, kids: Vec<Kid>) -> EngineResult<()>;
}
