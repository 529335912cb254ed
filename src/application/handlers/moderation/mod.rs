//! Moderation handlers.
//!
//! ## Commands
//! - Promoting and demoting users
//! - Issuing and rescinding bans and suspensions
//!
//! ## Queries
//! - Checking a user's disciplinary standing

mod check_standing;
mod demote_user;
mod discipline_user;
mod promote_user;
mod rescind_discipline;

// Commands
pub use demote_user::{DemoteUserCommand, DemoteUserHandler, DemoteUserResult};
pub use discipline_user::{
    DisciplineRequest, DisciplineUserCommand, DisciplineUserHandler, DisciplineUserResult,
};
pub use promote_user::{PromoteUserCommand, PromoteUserHandler, PromoteUserResult};
pub use rescind_discipline::{
    RescindDisciplineCommand, RescindDisciplineHandler, RescindDisciplineResult,
};

// Queries
pub use check_standing::{CheckStandingHandler, CheckStandingQuery, Standing};
