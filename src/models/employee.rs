//! Employee model and related types.
//!
//! This module defines the Employee struct and the Kid entry used for
//! positional kid1/kid2/kid3 identity.

use serde::{Deserialize, Serialize};

use super::Cluster;

/// A child on the employee roster.
///
/// The position in [`Employee::kids`] defines the kid's slot identity:
/// index 0 is kid1, index 1 is kid2, index 2 is kid3.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kid {
    /// The child's name.
    pub name: String,
    /// The child's age bracket (free text from the roster import).
    pub age_bracket: String,
}

/// Represents an employee attending the event with their family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique identifier for the employee (primary key).
    pub emp_id: String,
    /// The employee's name.
    pub name: String,
    /// The cluster the employee belongs to.
    pub cluster: Cluster,
    /// Free-text eligibility field from the roster. The employee counts as
    /// eligible iff this case-insensitively equals `"eligible"`.
    pub eligibility: String,
    /// The quota of present members that count as eligible for this
    /// employee. Members beyond the quota, and all "others", are
    /// ineligible regardless of the eligibility flag.
    pub expected_count: u32,
    /// The employee's children, in kid1/kid2/kid3 slot order.
    #[serde(default)]
    pub kids: Vec<Kid>,
}

impl Employee {
    /// Returns true if the employee's eligibility field marks them eligible.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::models::{Cluster, Employee};
    ///
    /// let employee = Employee {
    ///     emp_id: "EMP001".to_string(),
    ///     name: "Ravi Kumar".to_string(),
    ///     cluster: Cluster::Vijayawada,
    ///     eligibility: "Eligible".to_string(),
    ///     expected_count: 3,
    ///     kids: vec![],
    /// };
    /// assert!(employee.is_eligible());
    /// ```
    pub fn is_eligible(&self) -> bool {
        self.eligibility.eq_ignore_ascii_case("eligible")
    }

    /// Returns the roster name for a kid slot (0-based), if one exists.
    pub fn kid_name(&self, slot: usize) -> Option<&str> {
        self.kids.get(slot).map(|kid| kid.name.as_str())
    }
}
