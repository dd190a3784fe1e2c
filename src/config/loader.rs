//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading event and
//! operator configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::Cluster;

use super::types::{AdminUser, EventMetadata, KioskUser, UsersConfig};

/// Loads and provides access to event configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides lookup methods for operator accounts.
///
/// # Directory Structure
///
/// ```text
/// config/event/
/// ├── event.yaml   # Event metadata
/// └── users.yaml   # Kiosk operator and admin accounts
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/event").unwrap();
/// println!("Event: {}", loader.event().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    event: EventMetadata,
    users: UsersConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/event")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if a
    /// required file is missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let event_path = path.join("event.yaml");
        let event = Self::load_yaml::<EventMetadata>(&event_path)?;

        let users_path = path.join("users.yaml");
        let users = Self::load_yaml::<UsersConfig>(&users_path)?;

        Ok(Self { event, users })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the event metadata.
    pub fn event(&self) -> &EventMetadata {
        &self.event
    }

    /// Finds a kiosk user by username.
    pub fn find_kiosk_user(&self, username: &str) -> Option<&KioskUser> {
        self.users
            .kiosk_users
            .iter()
            .find(|user| user.username == username)
    }

    /// Returns all kiosk users serving a cluster.
    pub fn users_for_cluster(&self, cluster: Cluster) -> Vec<&KioskUser> {
        self.users
            .kiosk_users
            .iter()
            .filter(|user| user.cluster == cluster)
            .collect()
    }

    /// Returns the administrator account.
    pub fn admin(&self) -> &AdminUser {
        &self.users.admin
    }
}
