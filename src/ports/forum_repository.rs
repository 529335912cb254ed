//! Topic forum repository port.

use crate::domain::forum::TopicForum;
use crate::domain::foundation::DomainError;
use async_trait::async_trait;

/// Repository port for TopicForum persistence.
///
/// Forum names are unique and act as the key.
#[async_trait]
pub trait ForumRepository: Send + Sync {
    /// Find a forum by its name.
    ///
    /// Returns `None` if not found.
    async fn find_by_name(&self, name: &str) -> Result<Option<TopicForum>, DomainError>;

    /// Insert or replace a forum.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, forum: &TopicForum) -> Result<(), DomainError>;
}
