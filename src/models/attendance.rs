//! Attendance record model.
//!
//! One attendance record exists per checked-in employee. Saving again
//! replaces the whole record; callers that need the prior state for token
//! delta computation must capture it before the overwrite.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Employee;

/// An additional family member outside the employee/spouse/kids slots.
///
/// Others are always ineligible and never consume the employee's quota.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtherPerson {
    /// The person's name. An entry only counts as present when this is
    /// non-empty after trimming.
    pub name: String,
    /// Relation to the employee (free text).
    #[serde(default)]
    pub relation: String,
}

impl OtherPerson {
    /// Returns true if the entry has a usable name.
    pub fn is_named(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Returns true if both fields are empty after trimming. Blank entries
    /// are dropped during save validation rather than rejected.
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty() && self.relation.trim().is_empty()
    }
}

/// Per-slot kid name overrides captured at the kiosk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KidNames {
    /// Name override for kid slot 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kid1: Option<String>,
    /// Name override for kid slot 2.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kid2: Option<String>,
    /// Name override for kid slot 3.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kid3: Option<String>,
}

impl KidNames {
    /// Returns the override for a kid slot (0-based), if one was entered.
    pub fn slot(&self, slot: usize) -> Option<&str> {
        match slot {
            0 => self.kid1.as_deref(),
            1 => self.kid2.as_deref(),
            2 => self.kid3.as_deref(),
            _ => None,
        }
    }

    /// Returns the override for a slot when it is non-empty after trimming.
    pub fn named_slot(&self, slot: usize) -> Option<&str> {
        self.slot(slot).map(str::trim).filter(|name| !name.is_empty())
    }
}

/// Per-employee present/absent flags for one event day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    /// Whether the employee themselves is present.
    pub employee: bool,
    /// Whether the spouse is present.
    pub spouse: bool,
    /// Whether the kid in slot 1 is present.
    pub kid1: bool,
    /// Whether the kid in slot 2 is present.
    pub kid2: bool,
    /// Whether the kid in slot 3 is present.
    pub kid3: bool,
    /// Kid names entered at the kiosk, overriding the roster names.
    #[serde(default)]
    pub kid_names: KidNames,
    /// Additional family members, always ineligible.
    #[serde(default)]
    pub others: Vec<OtherPerson>,
    /// Username of the operator who marked this record.
    pub marked_by: String,
    /// When the record was marked.
    pub marked_at: DateTime<Utc>,
}

impl AttendanceRecord {
    /// Returns the presence flag for a kid slot (0-based).
    pub fn kid_flag(&self, slot: usize) -> bool {
        match slot {
            0 => self.kid1,
            1 => self.kid2,
            2 => self.kid3,
            _ => false,
        }
    }

    /// Returns true if any family member is marked present on this record.
    pub fn has_any_presence(&self) -> bool {
        self.employee
            || self.spouse
            || self.kid1
            || self.kid2
            || self.kid3
            || !self.others.is_empty()
    }

    /// Raw headcount of present members on this record.
    ///
    /// Counts the employee, the spouse, each kid flag whose name slot on
    /// this record is non-empty, and each named other. This rule
    /// deliberately ignores eligibility: tokens track physical people.
    pub fn present_member_count(&self) -> u32 {
        let mut count = 0;
        if self.employee {
            count += 1;
        }
        if self.spouse {
            count += 1;
        }
        for slot in 0..3 {
            if self.kid_flag(slot) && self.kid_names.named_slot(slot).is_some() {
                count += 1;
            }
        }
        count += self.others.iter().filter(|other| other.is_named()).count() as u32;
        count
    }
}

/// An employee joined with their attendance record, if they have checked in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeWithAttendance {
    /// The employee roster entry.
    #[serde(flatten)]
    pub employee: Employee,
    /// The attendance record, absent while the employee is pending.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendance_record: Option<AttendanceRecord>,
}
