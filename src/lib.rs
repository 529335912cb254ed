//! Multitopic Forum - authority and moderation core
//!
//! Users post in threads under topic forums, vote on posts, and are subject
//! to suspensions and bans issued by users holding higher-ranked roles.
//! This crate holds the ranked-role permission model, the discipline
//! lifecycle and the handlers that gate every write-like action on them.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
