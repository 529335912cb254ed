//! CastVoteHandler - Command handler for voting on posts.
//!
//! A voter gets one real vote per post. Once it is up or down it stays;
//! only a vote still in the `None` state can be replaced.

use std::sync::Arc;

use tracing::{debug, info};

use crate::application::handlers::actor::load_active_actor;
use crate::application::ModerationError;
use crate::domain::forum::{PostVote, VoteState};
use crate::domain::foundation::{PostId, Username};
use crate::ports::{Clock, PostRepository, PostVoteRepository, UserRepository};

/// Command to vote on a post. `value` must be `1` or `-1`.
#[derive(Debug, Clone)]
pub struct CastVoteCommand {
    pub actor: Username,
    pub post_id: PostId,
    pub value: i8,
}

/// Outcome of a vote, from the voter's point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastVoteResult {
    pub post_id: PostId,
    pub upvoted: bool,
    pub downvoted: bool,
    /// False if an earlier vote stood and this one was ignored.
    pub recorded: bool,
    pub vote_count: i64,
}

/// Handler for casting votes.
pub struct CastVoteHandler {
    users: Arc<dyn UserRepository>,
    posts: Arc<dyn PostRepository>,
    votes: Arc<dyn PostVoteRepository>,
    clock: Arc<dyn Clock>,
}

impl CastVoteHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        posts: Arc<dyn PostRepository>,
        votes: Arc<dyn PostVoteRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            users,
            posts,
            votes,
            clock,
        }
    }

    pub async fn handle(&self, cmd: CastVoteCommand) -> Result<CastVoteResult, ModerationError> {
        let now = self.clock.now();

        // 1. Validate the vote value
        let state = match VoteState::from_value(cmd.value) {
            Some(state) if state != VoteState::None => state,
            _ => {
                return Err(ModerationError::invalid_request(format!(
                    "vote value must be 1 or -1, got {}",
                    cmd.value
                )));
            }
        };

        // 2. Load actor and post
        load_active_actor(self.users.as_ref(), &cmd.actor, now).await?;
        let mut post = self
            .posts
            .find_by_id(&cmd.post_id)
            .await?
            .ok_or(ModerationError::PostNotFound(cmd.post_id))?;

        // 3. Record unless a real vote already stands
        let existing = self
            .votes
            .find_by_voter_and_post(&cmd.actor, &cmd.post_id)
            .await?;
        let recorded = existing
            .as_ref()
            .map_or(true, |vote| vote.state == VoteState::None);

        let current = if recorded {
            let vote = PostVote::new(cmd.actor.clone(), cmd.post_id, state);
            self.votes.upsert(&vote).await?;
            post.record_vote(vote);
            self.posts.save(&post).await?;
            info!(actor = %cmd.actor, post_id = %cmd.post_id, value = cmd.value, "Vote recorded");
            state
        } else {
            debug!(actor = %cmd.actor, post_id = %cmd.post_id, "Vote ignored; earlier vote stands");
            existing.map_or(VoteState::None, |vote| vote.state)
        };

        Ok(CastVoteResult {
            post_id: cmd.post_id,
            upvoted: current == VoteState::Upvote,
            downvoted: current == VoteState::Downvote,
            recorded,
            vote_count: post.vote_count(),
        })
    }
}
