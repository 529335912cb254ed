//! User module - accounts, ranked roles and authority decisions.
//!
//! # Domain Invariants
//!
//! 1. Role ranks are totally ordered; authority comparisons are strict
//! 2. A user without any positive-rank role outranks nobody
//! 3. Disciplines attached to a user always name that user

mod aggregate;
mod errors;
mod role;

pub use aggregate::User;
pub use errors::DisciplineError;
pub use role::RoleRank;
