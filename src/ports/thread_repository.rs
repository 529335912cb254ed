//! Thread repository port.

use crate::domain::forum::TopicThread;
use crate::domain::foundation::{DomainError, ThreadId};
use async_trait::async_trait;

/// Repository port for TopicThread persistence.
///
/// Implementations return threads fully hydrated: every post, in
/// chronological order, plus lock state.
#[async_trait]
pub trait ThreadRepository: Send + Sync {
    /// Find a thread by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &ThreadId) -> Result<Option<TopicThread>, DomainError>;

    /// Every thread filed under the named forum, in no particular order.
    async fn find_by_forum(&self, forum_name: &str) -> Result<Vec<TopicThread>, DomainError>;

    /// Insert or replace a thread and the posts it carries.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, thread: &TopicThread) -> Result<(), DomainError>;
}
