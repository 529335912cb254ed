//! In-memory adapters for development and tests.
//!
//! Backed by `tokio::sync::RwLock`; last writer wins. Nothing persists
//! across restarts.

mod forum_store;
mod post_vote_repository;
mod user_repository;

pub use forum_store::InMemoryForumStore;
pub use post_vote_repository::InMemoryPostVoteRepository;
pub use user_repository::InMemoryUserRepository;
