//! Token issue/collect delta between two attendance snapshots.
//!
//! When an operator edits an existing record, the kiosk shows how many
//! token sets to hand out or take back before the new record is persisted.
//! The delta is recomputed purely from the two snapshots; there is no
//! running counter.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::AttendanceRecord;

/// What the operator should do with physical token sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenAction {
    /// Hand out additional token sets.
    Issue,
    /// Take back token sets.
    Collect,
    /// The headcount did not change.
    NoChange,
}

/// The advisory token action shown before a record is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenDelta {
    /// The action to take.
    pub action: TokenAction,
    /// How many token sets the action applies to. Zero for no-change.
    pub amount: u32,
}

/// Computes the token delta between the previous snapshot and the newly
/// submitted state.
///
/// Both sides use the raw headcount rule ([`AttendanceRecord::present_member_count`]):
/// eligibility plays no part because tokens track physical people. A
/// first-time save has a previous count of zero, so everyone present is
/// issued a token set.
///
/// # Examples
///
/// ```
/// use attendance_engine::accounting::{compute_token_delta, TokenAction};
/// use attendance_engine::models::{AttendanceRecord, KidNames};
/// use chrono::Utc;
///
/// let submission = AttendanceRecord {
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
/// let delta = compute_token_delta(None, &submission);
/// assert_eq!(delta.action, TokenAction::Issue);
/// assert_eq!(delta.amount, 2);
/// ```
pub fn compute_token_delta(
    previous: Option<&AttendanceRecord>,
    current: &AttendanceRecord,
) -> TokenDelta {
    let prev_count = previous.map_or(0, AttendanceRecord::present_member_count);
    let curr_count = current.present_member_count();

    match curr_count.cmp(&prev_count) {
        Ordering::Greater => TokenDelta {
            action: TokenAction::Issue,
            amount: curr_count - prev_count,
        },
        Ordering::Less => TokenDelta {
            action: TokenAction::Collect,
            amount: prev_count - curr_count,
        },
        Ordering::Equal => TokenDelta {
            action: TokenAction::NoChange,
            amount: 0,
        },
    }
}
