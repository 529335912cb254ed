//! Discipline domain module.
//!
//! Bans and suspensions issued against users by moderators.
//!
//! # Module Structure
//!
//! - `entity` - Discipline entity and its expiry rules
//! - `kind` - DisciplineType (suspension or ban)

mod entity;
mod kind;

pub use entity::{Discipline, REASON_MAX_LENGTH, REASON_MIN_LENGTH, SUSPENSION_MAX_HOURS};
pub use kind::DisciplineType;
