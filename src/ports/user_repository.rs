//! User repository port.
//!
//! Loads and persists User aggregates together with their roles and full
//! discipline history.
//!
//! # Concurrency
//!
//! Decisions are made against a snapshot. Implementations backed by a real
//! store must serialize concurrent writes to the same user (a transaction
//! or an optimistic version check) so that, for example, a promotion racing
//! a demotion cannot both apply.

use crate::domain::foundation::{DomainError, Username};
use crate::domain::user::User;
use async_trait::async_trait;

/// Repository port for User aggregate persistence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by username.
    ///
    /// Returns `None` if not found.
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, DomainError>;

    /// Insert or replace a user, including roles and disciplines.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, user: &User) -> Result<(), DomainError>;
}
