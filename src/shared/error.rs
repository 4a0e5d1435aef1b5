use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Sync failed: {0}")]
    SyncFailed(String),

    #[error("Operation had no effect")]
    EmptyEffect,

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Stable machine-readable code for the failure envelope.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Database(_) => "database_error",
            AppError::NotFound(_) => "not_found",
            AppError::InvalidParameter(_) => "invalid_parameter",
            AppError::SyncFailed(_) => "sync_failed",
            AppError::EmptyEffect => "empty_effect",
            AppError::ConfigurationError(_) => "configuration_error",
            AppError::Internal(_) => "internal_error",
        }
    }

    /// Message safe to hand back to callers. Never includes the inner detail.
    pub fn user_message(&self) -> String {
        match self {
            AppError::NotFound(_) => "The requested record was not found".to_string(),
            AppError::InvalidParameter(_) => {
                "The request contained an invalid parameter".to_string()
            }
            AppError::SyncFailed(_) => "The event could not be synced to the topic".to_string(),
            AppError::EmptyEffect => "Nothing matched the request".to_string(),
            AppError::Database(_) | AppError::ConfigurationError(_) | AppError::Internal(_) => {
                "The operation failed".to_string()
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err.to_string())
    }
}

impl From<sqlx::migrate::MigrateError> for AppError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        AppError::Database(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_hides_inner_detail() {
        let err = AppError::Database("no such table: events".to_string());
        assert_eq!(err.code(), "database_error");
        assert!(!err.user_message().contains("events"));
        assert!(err.to_string().contains("no such table"));
    }

    #[test]
    fn empty_effect_has_its_own_code() {
        assert_eq!(AppError::EmptyEffect.code(), "empty_effect");
    }
}
