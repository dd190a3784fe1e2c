//! Configuration loading and management for the Attendance Engine.
//!
//! This module provides functionality to load event configuration from
//! YAML files, including event metadata and kiosk operator accounts.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/event").unwrap();
//! println!("Loaded event: {}", config.event().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AdminUser, EventMetadata, KioskUser, UsersConfig};
