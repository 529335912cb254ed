//! Post votes.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PostId, Username};

/// State of one user's vote on one post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoteState {
    Upvote,
    #[default]
    None,
    Downvote,
}

impl VoteState {
    /// Contribution of this vote to a post's tally.
    pub fn value(&self) -> i8 {
        match self {
            VoteState::Upvote => 1,
            VoteState::None => 0,
            VoteState::Downvote => -1,
        }
    }

    /// Maps a tally value back to a state; `None` for anything but -1, 0, 1.
    pub fn from_value(value: i8) -> Option<Self> {
        match value {
            1 => Some(VoteState::Upvote),
            0 => Some(VoteState::None),
            -1 => Some(VoteState::Downvote),
            _ => None,
        }
    }
}

/// One user's vote on one post.
///
/// At most one exists per (voter, post); uniqueness is enforced by the
/// vote repository's upsert, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostVote {
    pub voter: Username,
    pub post_id: PostId,
    pub state: VoteState,
}

impl PostVote {
    pub fn new(voter: Username, post_id: PostId, state: VoteState) -> Self {
        Self {
            voter,
            post_id,
            state,
        }
    }

    pub fn value(&self) -> i8 {
        self.state.value()
    }

    pub fn is_upvote(&self) -> bool {
        self.state == VoteState::Upvote
    }

    pub fn is_downvote(&self) -> bool {
        self.state == VoteState::Downvote
    }
}
