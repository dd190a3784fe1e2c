//! Request types for the Attendance Engine API.
//!
//! This module defines the JSON request structures for the attendance
//! endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{AttendanceRecord, KidNames, OtherPerson};

/// Request body for the `POST /attendance/:emp_id` endpoint.
///
/// Carries the presence flags and names entered at the kiosk. The server
/// stamps `markedAt`; the kiosk only supplies who marked the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSubmission {
    /// Whether the employee themselves is present.
    #[serde(default)]
    pub employee: bool,
    /// Whether the spouse is present.
    #[serde(default)]
    pub spouse: bool,
    /// Whether the kid in slot 1 is present.
    #[serde(default)]
    pub kid1: bool,
    /// Whether the kid in slot 2 is present.
    #[serde(default)]
    pub kid2: bool,
    /// Whether the kid in slot 3 is present.
    #[serde(default)]
    pub kid3: bool,
    /// Kid names entered at the kiosk.
    #[serde(default)]
    pub kid_names: KidNames,
    /// Additional family members.
    #[serde(default)]
    pub others: Vec<OtherPersonRequest>,
    /// Username of the operator submitting the record.
    pub marked_by: String,
}

/// An "other" family member in a submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtherPersonRequest {
    /// The person's name.
    #[serde(default)]
    pub name: String,
    /// Relation to the employee.
    #[serde(default)]
    pub relation: String,
}

impl From<OtherPersonRequest> for OtherPerson {
    fn from(req: OtherPersonRequest) -> Self {
        OtherPerson {
            name: req.name,
            relation: req.relation,
        }
    }
}

impl AttendanceSubmission {
    /// Converts the submission into a domain record stamped with the
    /// given save time.
    pub fn into_record(self, marked_at: DateTime<Utc>) -> AttendanceRecord {
        AttendanceRecord {
            employee: self.employee,
            spouse: self.spouse,
            kid1: self.kid1,
            kid2: self.kid2,
            kid3: self.kid3,
            kid_names: self.kid_names,
            others: self.others.into_iter().map(Into::into).collect(),
            marked_by: self.marked_by,
            marked_at,
        }
    }
}

/// Request body for the `POST /login` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// The operator's username.
    pub username: String,
    /// The operator's password in plain text.
    pub password: String,
}

/// Query parameters for the `GET /employees` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeQuery {
    /// Restrict the listing to one cluster.
    #[serde(default)]
    pub cluster: Option<String>,
    /// Narrow the listing by a search term on name or employee ID.
    #[serde(default)]
    pub search: Option<String>,
}
