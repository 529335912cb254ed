//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the forum domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{DisciplineId, PostId, ThreadId, Username, USERNAME_MIN_LENGTH};
pub use timestamp::Timestamp;
