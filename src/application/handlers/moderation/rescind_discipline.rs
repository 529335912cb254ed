//! RescindDisciplineHandler - Command handler for cancelling a discipline.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::handlers::actor::{find_user, load_active_actor, load_user};
use crate::application::ModerationError;
use crate::domain::foundation::{DisciplineId, Username};
use crate::ports::{Clock, UserRepository};

/// Command to rescind one of a user's disciplines.
#[derive(Debug, Clone)]
pub struct RescindDisciplineCommand {
    pub actor: Username,
    pub target: Username,
    pub discipline_id: DisciplineId,
}

/// Result of a rescission.
#[derive(Debug, Clone)]
pub struct RescindDisciplineResult {
    pub discipline_id: DisciplineId,
    /// False if the discipline had already been rescinded.
    pub changed: bool,
    /// Whether the target is still banned or suspended afterwards.
    pub still_disciplined: bool,
}

/// Handler for rescinding disciplines.
pub struct RescindDisciplineHandler {
    users: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
}

impl RescindDisciplineHandler {
    pub fn new(users: Arc<dyn UserRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { users, clock }
    }

    pub async fn handle(
        &self,
        cmd: RescindDisciplineCommand,
    ) -> Result<RescindDisciplineResult, ModerationError> {
        let now = self.clock.now();

        let actor = load_active_actor(self.users.as_ref(), &cmd.actor, now).await?;
        let mut target = load_user(self.users.as_ref(), &cmd.target).await?;

        let issuer_name = target
            .discipline(cmd.discipline_id)
            .map(|d| d.disciplining_user().clone())
            .ok_or(ModerationError::DisciplineNotFound(cmd.discipline_id))?;
        let issuer = find_user(self.users.as_ref(), &issuer_name).await?;

        let discipline = target
            .discipline_mut(cmd.discipline_id)
            .ok_or(ModerationError::DisciplineNotFound(cmd.discipline_id))?;

        if !discipline.is_rescindable_by(Some(&actor), issuer.as_ref()) {
            warn!(
                actor = %cmd.actor,
                target = %cmd.target,
                discipline_id = %cmd.discipline_id,
                "Refused rescission by insufficient authority"
            );
            return Err(ModerationError::forbidden(
                &cmd.actor,
                "rescind this discipline",
            ));
        }

        let changed = !discipline.is_rescinded();
        if changed {
            discipline.rescind();
            self.users.save(&target).await?;
            info!(
                actor = %cmd.actor,
                target = %cmd.target,
                discipline_id = %cmd.discipline_id,
                "Discipline rescinded"
            );
        }

        Ok(RescindDisciplineResult {
            discipline_id: cmd.discipline_id,
            changed,
            still_disciplined: target.is_banned_or_suspended(now),
        })
    }
}
