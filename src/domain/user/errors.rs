//! User-specific error types.

use crate::domain::foundation::{ErrorCode, Username};
use thiserror::Error;

/// Errors raised when attaching a discipline to a user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisciplineError {
    /// The discipline was issued against somebody else.
    #[error("Discipline issued against '{disciplined}' cannot be added to '{user}'")]
    UserMismatch {
        user: Username,
        disciplined: Username,
    },
}

impl DisciplineError {
    pub fn user_mismatch(user: Username, disciplined: Username) -> Self {
        DisciplineError::UserMismatch { user, disciplined }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            DisciplineError::UserMismatch { .. } => ErrorCode::InvalidRequest,
        }
    }
}
