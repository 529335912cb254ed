//! DemoteUserHandler - Command handler for lowering a user's rank.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::handlers::actor::{load_active_actor, load_user};
use crate::application::ModerationError;
use crate::domain::foundation::Username;
use crate::domain::user::{RoleRank, User};
use crate::ports::{Clock, UserRepository};

/// Command to demote a user one rank.
///
/// `requested_rank` must be the rank directly below the target's current
/// highest authority.
#[derive(Debug, Clone)]
pub struct DemoteUserCommand {
    pub actor: Username,
    pub target: Username,
    pub requested_rank: RoleRank,
}

/// Result of a successful demotion.
#[derive(Debug, Clone)]
pub struct DemoteUserResult {
    pub user: User,
    pub new_rank: RoleRank,
}

/// Handler for demoting users.
pub struct DemoteUserHandler {
    users: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
}

impl DemoteUserHandler {
    pub fn new(users: Arc<dyn UserRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { users, clock }
    }

    pub async fn handle(&self, cmd: DemoteUserCommand) -> Result<DemoteUserResult, ModerationError> {
        let now = self.clock.now();

        let actor = load_active_actor(self.users.as_ref(), &cmd.actor, now).await?;
        let mut target = load_user(self.users.as_ref(), &cmd.target).await?;

        if target.decremented_rank() != Some(cmd.requested_rank) {
            warn!(
                actor = %cmd.actor,
                target = %cmd.target,
                requested = %cmd.requested_rank,
                "Refused demotion to a rank other than the previous one"
            );
            return Err(ModerationError::invalid_request(format!(
                "'{}' cannot be demoted to {}",
                cmd.target, cmd.requested_rank
            )));
        }

        if !target.is_demotable_by(&actor) {
            warn!(actor = %cmd.actor, target = %cmd.target, "Refused demotion by insufficient authority");
            return Err(ModerationError::forbidden(
                &cmd.actor,
                format!("demote '{}'", cmd.target),
            ));
        }

        let new_rank = target.demote().ok_or_else(|| {
            ModerationError::invalid_request(format!("'{}' is already at the lowest rank", cmd.target))
        })?;
        self.users.save(&target).await?;

        info!(actor = %cmd.actor, target = %cmd.target, rank = %new_rank, "User demoted");

        Ok(DemoteUserResult {
            user: target,
            new_rank,
        })
    }
}
