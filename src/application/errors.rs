//! Application-level error type.
//!
//! The domain answers authorization questions with booleans; handlers turn
//! a refusal into one of these errors at the boundary.

use thiserror::Error;

use crate::domain::foundation::{
    DisciplineId, DomainError, ErrorCode, PostId, ThreadId, Username, ValidationError,
};
use crate::domain::user::DisciplineError;

/// Errors returned by moderation handlers.
#[derive(Debug, Clone, Error)]
pub enum ModerationError {
    #[error("User not found: {0}")]
    UserNotFound(Username),

    #[error("Post not found: {0}")]
    PostNotFound(PostId),

    #[error("Forum not found: {0}")]
    ForumNotFound(String),

    #[error("Thread not found: {0}")]
    ThreadNotFound(ThreadId),

    #[error("Thread is locked: {0}")]
    ThreadLocked(ThreadId),

    #[error("Discipline not found: {0}")]
    DisciplineNotFound(DisciplineId),

    #[error("'{actor}' is not permitted to {action}")]
    Forbidden { actor: Username, action: String },

    #[error("'{0}' is banned or suspended")]
    ActorDisciplined(Username),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl ModerationError {
    pub fn forbidden(actor: &Username, action: impl Into<String>) -> Self {
        ModerationError::Forbidden {
            actor: actor.clone(),
            action: action.into(),
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        ModerationError::InvalidRequest(message.into())
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        ModerationError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ModerationError::UserNotFound(_) => ErrorCode::UserNotFound,
            ModerationError::PostNotFound(_) => ErrorCode::PostNotFound,
            ModerationError::ForumNotFound(_) => ErrorCode::ForumNotFound,
            ModerationError::ThreadNotFound(_) => ErrorCode::ThreadNotFound,
            ModerationError::ThreadLocked(_) => ErrorCode::ThreadLocked,
            ModerationError::DisciplineNotFound(_) => ErrorCode::DisciplineNotFound,
            ModerationError::Forbidden { .. } => ErrorCode::Forbidden,
            ModerationError::ActorDisciplined(_) => ErrorCode::ActorDisciplined,
            ModerationError::InvalidRequest(_) => ErrorCode::InvalidRequest,
            ModerationError::Validation(err) => ErrorCode::from(err),
            ModerationError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns true if retrying the same command might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ModerationError::Infrastructure(_))
    }
}

impl From<DomainError> for ModerationError {
    fn from(err: DomainError) -> Self {
        ModerationError::Infrastructure(err.to_string())
    }
}

impl From<DisciplineError> for ModerationError {
    fn from(err: DisciplineError) -> Self {
        ModerationError::InvalidRequest(err.to_string())
    }
}
