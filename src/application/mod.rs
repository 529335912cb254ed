//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

mod errors;
pub mod handlers;

pub use errors::ModerationError;
pub use handlers::*;
