//! Error types for the Attendance Accounting Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while recording attendance.

use thiserror::Error;

/// The main error type for the Attendance Accounting Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A record was submitted with no family member marked present.
    #[error("At least one family member must be marked present")]
    NoMemberPresent,

    /// A kid was marked present but no name was provided for that slot.
    #[error("Kid {slot} is marked present but has no name")]
    MissingKidName {
        /// The kid slot (1 through 3) that is missing a name.
        slot: u8,
    },

    /// An "other" entry has a relation but no name.
    #[error("Other entry {index} has a relation but no name")]
    OtherMissingName {
        /// Zero-based position of the entry in the submitted list.
        index: usize,
    },

    /// A cluster value outside the closed set of event cities.
    #[error("Unknown cluster: {value}")]
    UnknownCluster {
        /// The value that did not match any event city.
        value: String,
    },

    /// No employee exists with the given ID.
    #[error("Employee not found: {emp_id}")]
    EmployeeNotFound {
        /// The employee ID that was not found.
        emp_id: String,
    },

    /// The record store failed to read or write.
    #[error("Persistence failure: {message}")]
    Persistence {
        /// A description of the store failure.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_member_present_display() {
        let error = EngineError::NoMemberPresent;
        assert_eq!(
            error.to_string(),
            "At least one family member must be marked present"
        );
    }

    #[test]
    fn test_missing_kid_name_displays_slot() {
        let error = EngineError::MissingKidName { slot: 2 };
        assert_eq!(error.to_string(), "Kid 2 is marked present but has no name");
    }

    #[test]
    fn test_other_missing_name_displays_index() {
        let error = EngineError::OtherMissingName { index: 0 };
        assert_eq!(error.to_string(), "Other entry 0 has a relation but no name");
    }

    #[test]
    fn test_unknown_cluster_displays_value() {
        let error = EngineError::UnknownCluster {
            value: "Guntur".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown cluster: Guntur");
    }

    #[test]
    fn test_employee_not_found_displays_id() {
        let error = EngineError::EmployeeNotFound {
            emp_id: "EMP042".to_string(),
        };
        assert_eq!(error.to_string(), "Employee not found: EMP042");
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_no_member_present() -> EngineResult<()> {
            Err(EngineError::NoMemberPresent)
        }

        fn propagates_error() -> EngineResult<()> {
            returns_no_member_present()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
