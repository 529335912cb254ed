//! Post repository port.

use crate::domain::forum::Post;
use crate::domain::foundation::{DomainError, PostId};
use async_trait::async_trait;

/// Repository port for Post persistence.
///
/// Soft-delete fields and votes are persisted with the post.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find a post by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, DomainError>;

    /// Insert or replace a post.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, post: &Post) -> Result<(), DomainError>;
}
