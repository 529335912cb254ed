//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `UserRepository` - Users with roles and discipline history
//! - `ForumRepository` - Topic forums keyed by name
//! - `PostRepository` - Posts with soft-delete state and votes
//! - `ThreadRepository` - Threads hydrated with their posts
//! - `PostVoteRepository` - One vote per (voter, post)
//!
//! ## Time
//!
//! - `Clock` - Current instant, read once per command

mod clock;
mod forum_repository;
mod post_repository;
mod post_vote_repository;
mod thread_repository;
mod user_repository;

pub use clock::Clock;
pub use forum_repository::ForumRepository;
pub use post_repository::PostRepository;
pub use post_vote_repository::PostVoteRepository;
pub use thread_repository::ThreadRepository;
pub use user_repository::UserRepository;
