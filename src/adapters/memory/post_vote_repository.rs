//! In-memory post vote repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::forum::PostVote;
use crate::domain::foundation::{DomainError, PostId, Username};
use crate::ports::PostVoteRepository;

/// In-memory vote storage with a unique key on (voter, post).
#[derive(Debug, Clone)]
pub struct InMemoryPostVoteRepository {
    votes: Arc<RwLock<HashMap<(Username, PostId), PostVote>>>,
}

impl InMemoryPostVoteRepository {
    pub fn new() -> Self {
        Self {
            votes: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored votes across all posts.
    pub async fn vote_count(&self) -> usize {
        self.votes.read().await.len()
    }
}

impl Default for InMemoryPostVoteRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostVoteRepository for InMemoryPostVoteRepository {
    async fn find_by_voter_and_post(
        &self,
        voter: &Username,
        post_id: &PostId,
    ) -> Result<Option<PostVote>, DomainError> {
        let votes = self.votes.read().await;
        Ok(votes.get(&(voter.clone(), *post_id)).cloned())
    }

    async fn upsert(&self, vote: &PostVote) -> Result<(), DomainError> {
        let mut votes = self.votes.write().await;
        votes.insert((vote.voter.clone(), vote.post_id), vote.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::forum::VoteState;

    #[tokio::test]
    async fn upsert_keeps_one_vote_per_voter_and_post() {
        let repo = InMemoryPostVoteRepository::new();
        let voter = Username::new("voter").unwrap();
        let post_id = PostId::new();

        repo.upsert(&PostVote::new(voter.clone(), post_id, VoteState::None))
            .await
            .unwrap();
        repo.upsert(&PostVote::new(voter.clone(), post_id, VoteState::Upvote))
            .await
            .unwrap();

        assert_eq!(repo.vote_count().await, 1);
        let stored = repo
            .find_by_voter_and_post(&voter, &post_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.state, VoteState::Upvote);
    }

    #[tokio::test]
    async fn votes_on_different_posts_are_independent() {
        let repo = InMemoryPostVoteRepository::new();
        let voter = Username::new("voter").unwrap();

        repo.upsert(&PostVote::new(voter.clone(), PostId::new(), VoteState::Upvote))
            .await
            .unwrap();

        let other = repo
            .find_by_voter_and_post(&voter, &PostId::new())
            .await
            .unwrap();
        assert!(other.is_none());
    }
}
