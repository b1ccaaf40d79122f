// src/application/error_handling.rs
//
// Error Handling for Commands
//
// ARCHITECTURE:
// - Maps internal errors → user-friendly responses
// - Provides consistent error format for every output mode
// - Never exposes internal implementation details
// - Logs errors for debugging

use log::error;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Standard error response for the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Recipe id that doesn't exist
    NotFound,

    /// Invalid input/validation error
    Validation,

    /// Storage unusable or write refused
    Storage,

    /// Bad configuration file or flags
    Configuration,

    /// File system error
    FileSystem,

    /// Other/unknown error
    Internal,
}

impl ErrorResponse {
    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::NotFound => Self::not_found("Recipe"),

            AppError::Domain(domain_error) => Self {
                success: false,
                error_type: ErrorType::Validation,
                message: "Recipe data is not valid".to_string(),
                details: Some(domain_error.to_string()),
            },

            AppError::Serialization(serde_error) => Self {
                success: false,
                error_type: ErrorType::Validation,
                message: "Data could not be read as recipe JSON".to_string(),
                details: Some(serde_error.to_string()),
            },

            AppError::PersistenceFailed(reason) => {
                error!("Persistence failed: {}", reason);

                Self {
                    success: false,
                    error_type: ErrorType::Storage,
                    message: "Your changes could not be saved. Please try again.".to_string(),
                    details: Some(reason),
                }
            }

            AppError::Storage(storage_error) => {
                error!("Storage error: {:?}", storage_error);

                Self {
                    success: false,
                    error_type: ErrorType::Storage,
                    message: "Recipe storage is not available".to_string(),
                    details: Some("Check logs for details".to_string()),
                }
            }

            AppError::Config(message) => Self {
                success: false,
                error_type: ErrorType::Configuration,
                message: "Configuration is invalid".to_string(),
                details: Some(message),
            },

            AppError::Io(io_error) => {
                error!("IO error: {:?}", io_error);

                Self {
                    success: false,
                    error_type: ErrorType::FileSystem,
                    message: "File system operation failed".to_string(),
                    details: Some(io_error.to_string()),
                }
            }

            AppError::Other(message) => {
                error!("Other error: {}", message);

                Self {
                    success: false,
                    error_type: ErrorType::Internal,
                    message,
                    details: None,
                }
            }
        }
    }

    /// Create not found error
    pub fn not_found(resource: &str) -> Self {
        Self {
            success: false,
            error_type: ErrorType::NotFound,
            message: format!("{} not found", resource),
            details: None,
        }
    }

    /// Process exit status for this kind of failure
    pub fn exit_code(&self) -> i32 {
        match self.error_type {
            ErrorType::NotFound => 3,
            ErrorType::Validation | ErrorType::Configuration => 2,
            _ => 1,
        }
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "error: {}", self.message)?;
        if let Some(details) = &self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn test_not_found_error() {
        let error = ErrorResponse::from_app_error(AppError::NotFound);
        assert_eq!(error.error_type, ErrorType::NotFound);
        assert_eq!(error.message, "Recipe not found");
        assert_eq!(error.exit_code(), 3);
    }

    #[test]
    fn test_domain_error_is_validation() {
        let error = ErrorResponse::from_app_error(AppError::Domain(
            DomainError::InvariantViolation("Recipe title cannot be empty".to_string()),
        ));
        assert_eq!(error.error_type, ErrorType::Validation);
        assert!(error.to_string().contains("title cannot be empty"));
    }

    #[test]
    fn test_persistence_failure_asks_to_retry() {
        let error =
            ErrorResponse::from_app_error(AppError::PersistenceFailed("quota".to_string()));
        assert_eq!(error.error_type, ErrorType::Storage);
        assert!(error.message.contains("try again"));
    }

    #[test]
    fn test_serialization() {
        let error = ErrorResponse::not_found("Recipe");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("not_found"));
        assert!(json.contains("Recipe not found"));
    }
}
