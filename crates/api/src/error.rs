// Copyright (C) 2026 Studio Maru
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use maru_persistence::StoreError;

/// API-level errors.
///
/// Validation, authentication, and not-found errors carry the exact
/// user-facing text the clients display; internal errors carry detail
/// for the logs and are replaced by a generic message at the HTTP edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// One or more validation rules were violated. The ordered message
    /// list is surfaced verbatim to the submitter.
    ValidationFailed {
        /// The violated-rule messages, in declared rule order.
        errors: Vec<String>,
    },
    /// Authentication failed.
    AuthenticationFailed {
        /// The user-facing message.
        message: String,
    },
    /// A requested record was not found.
    NotFound {
        /// The user-facing message.
        message: String,
    },
    /// The request carried an invalid value.
    InvalidInput {
        /// The user-facing message.
        message: String,
    },
    /// The persistence collaborator signaled an error. Detail is
    /// logged, never surfaced; the caller sees a generic message.
    Storage {
        /// A description of the storage error.
        message: String,
    },
    /// An internal error occurred. Detail is logged, never surfaced.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ValidationFailed { errors } => {
                write!(f, "Validation failed: {}", errors.join(" / "))
            }
            Self::AuthenticationFailed { message } => {
                write!(f, "Authentication failed: {message}")
            }
            Self::NotFound { message } => write!(f, "Not found: {message}"),
            Self::InvalidInput { message } => write!(f, "Invalid input: {message}"),
            Self::Storage { message } => write!(f, "Storage error: {message}"),
            Self::Internal { message } => write!(f, "Internal error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::Storage {
            message: err.to_string(),
        }
    }
}
