//! Centralized error handling and classification

use crate::api::error::ApiError;
use crate::logging::LogLevel;
use crate::sync::SyncError;

/// Centralized error handler for all network operations
#[derive(Debug, Clone, Default)]
pub struct ErrorHandler;

impl ErrorHandler {
    pub fn new() -> Self {
        Self
    }

    /// Classify error and determine appropriate log level
    pub fn classify_error(&self, error: &ApiError) -> LogLevel {
        match error.status() {
            // Rate limiting - low priority
            Some(429) => LogLevel::Debug,

            // Server errors - temporary issues
            Some(500..=599) => LogLevel::Warn,

            // Rejected payloads and missing resources need the user's attention
            Some(400..=499) => LogLevel::Error,

            Some(_) => LogLevel::Warn,

            // No answer: undecodable body, or a network issue that is usually temporary
            None => match error {
                ApiError::Decode(_) => LogLevel::Error,
                _ => LogLevel::Warn,
            },
        }
    }

    /// Classify a reconciliation failure for the activity log
    pub fn classify_sync_error(&self, error: &SyncError) -> LogLevel {
        match error {
            SyncError::NetworkFailure(inner) => self.classify_error(inner),
            SyncError::ServerRejected { status, .. } if (500..=599).contains(status) => {
                LogLevel::Warn
            }
            SyncError::ServerRejected { .. } => LogLevel::Error,
            SyncError::NotFound(_) => LogLevel::Warn,
        }
    }

    /// Determine if an error should trigger retry logic
    pub fn should_retry(&self, error: &ApiError) -> bool {
        match error {
            // Retry on network/connection errors
            ApiError::Reqwest(_) => true,
            // A body we cannot decode will not improve on retry
            ApiError::Decode(_) => false,

            // HTTP errors - check status code
            ApiError::Http { status, .. } => match *status {
                // Timeouts and rate limiting are worth another try
                408 | 429 => true,
                // Other client errors will fail the same way again
                400..=499 => false,
                // Retry server errors
                500..=599 => true,
                // Don't retry other status codes
                _ => false,
            },
        }
    }
}
