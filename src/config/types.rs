//! Configuration types for the attendance kiosks.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::Cluster;

/// Metadata about the event.
#[derive(Debug, Clone, Deserialize)]
pub struct EventMetadata {
    /// The human-readable name of the event.
    pub name: String,
    /// The organizing unit running the event.
    pub organizer: String,
    /// The date the event takes place.
    pub event_date: NaiveDate,
}

/// A kiosk operator account bound to one cluster.
#[derive(Debug, Clone, Deserialize)]
pub struct KioskUser {
    /// Login username.
    pub username: String,
    /// SHA-256 hex digest of the password.
    pub password_hash: String,
    /// The cluster this kiosk serves.
    pub cluster: Cluster,
    /// Name shown in the kiosk header and in `markedBy` displays.
    pub display_name: String,
}

/// The administrator account with access to every cluster.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminUser {
    /// Login username.
    pub username: String,
    /// SHA-256 hex digest of the password.
    pub password_hash: String,
}

/// Users configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct UsersConfig {
    /// Kiosk operator accounts.
    pub kiosk_users: Vec<KioskUser>,
    /// The administrator account.
    pub admin: AdminUser,
}
