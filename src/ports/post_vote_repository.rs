//! Post vote repository port.
//!
//! Votes are keyed on (voter, post). The store is what guarantees a voter
//! has at most one vote per post.

use crate::domain::forum::PostVote;
use crate::domain::foundation::{DomainError, PostId, Username};
use async_trait::async_trait;

/// Repository port for PostVote persistence.
#[async_trait]
pub trait PostVoteRepository: Send + Sync {
    /// Find the vote `voter` cast on `post_id`.
    ///
    /// Returns `None` if the voter has never voted on the post.
    async fn find_by_voter_and_post(
        &self,
        voter: &Username,
        post_id: &PostId,
    ) -> Result<Option<PostVote>, DomainError>;

    /// Insert the vote, replacing any existing vote by the same voter on
    /// the same post.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn upsert(&self, vote: &PostVote) -> Result<(), DomainError>;
}
