//! Application handlers.
//!
//! Each handler loads what it needs through ports, reads the clock once,
//! asks the domain whether the actor may act, then mutates and persists.

pub(crate) mod actor;
pub mod forum;
pub mod moderation;

#[cfg(test)]
pub(crate) mod test_support;

pub use forum::*;
pub use moderation::*;
