//! Domain layer containing the forum's business rules.
//!
//! Everything here is synchronous and free of I/O. Time-dependent decisions
//! take `now` as an argument.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `user` - Users, ranked roles and authority decisions
//! - `discipline` - Bans and suspensions
//! - `forum` - Topic forums, threads, posts and votes

pub mod discipline;
pub mod forum;
pub mod foundation;
pub mod user;
