//! Forum handlers.
//!
//! ## Commands
//! - Starting threads and replying to them
//! - Deleting and restoring posts
//! - Locking and unlocking threads
//! - Voting on posts
//!
//! ## Queries
//! - Listing a forum's threads a page at a time

mod cast_vote;
mod create_post;
mod create_thread;
mod delete_post;
mod list_threads;
mod lock_thread;
mod restore_post;

pub use cast_vote::{CastVoteCommand, CastVoteHandler, CastVoteResult};
pub use create_post::{CreatePostCommand, CreatePostHandler, CreatePostResult};
pub use create_thread::{CreateThreadCommand, CreateThreadHandler, CreateThreadResult};
pub use delete_post::{DeletePostCommand, DeletePostHandler, DeletePostResult};
pub use list_threads::{
    ForumThreadsPage, ListForumThreadsHandler, ListForumThreadsQuery, ThreadSummary,
};
pub use lock_thread::{
    LockThreadCommand, LockThreadHandler, ThreadLockResult, UnlockThreadCommand,
    UnlockThreadHandler,
};
pub use restore_post::{RestorePostCommand, RestorePostHandler, RestorePostResult};
