//! Service layer error types
//!
//! Rule violations come from the domain. Failures outside it, such as a
//! context wired without a repository, travel as an [`AppError`].

use blog_common::AppError;
use blog_core::DomainError;
use std::fmt;

/// Error returned by every service operation
#[derive(Debug)]
pub enum ServiceError {
    Domain(DomainError),
    App(AppError),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::App(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            Self::App(e) => Some(e),
        }
    }
}

impl ServiceError {
    /// HTTP status this error surfaces as
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => AppError::domain_status(e),
            Self::App(e) => e.status_code(),
        }
    }

    /// Stable error code for API responses
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<AppError> for ServiceError {
    fn from(err: AppError) -> Self {
        Self::App(err)
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::App(e) => e,
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
