//! Forum module - topic forums, threads, posts and votes.
//!
//! # Module Structure
//!
//! - `post` - Post entity with soft-delete and vote tally
//! - `vote` - PostVote and VoteState
//! - `thread` - TopicThread with chronological posts and locking
//! - `topic_forum` - TopicForum and thread listing order

mod post;
mod thread;
mod topic_forum;
mod vote;

pub use post::{Post, ELLIPSIS};
pub use thread::{TopicThread, THREAD_TITLE_MIN_LENGTH};
pub use topic_forum::{
    sort_threads_by_recent_activity, TopicForum, FORUM_DESCRIPTION_MAX_LENGTH,
    FORUM_NAME_MIN_LENGTH,
};
pub use vote::{PostVote, VoteState};
