//! DisciplineUserHandler - Command handler for banning or suspending users.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::handlers::actor::{load_active_actor, load_user};
use crate::application::ModerationError;
use crate::domain::discipline::Discipline;
use crate::domain::foundation::Username;
use crate::ports::{Clock, UserRepository};

/// What kind of discipline to issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisciplineRequest {
    Ban,
    Suspension { hours: u32 },
}

/// Command to discipline a user.
#[derive(Debug, Clone)]
pub struct DisciplineUserCommand {
    pub actor: Username,
    pub target: Username,
    pub kind: DisciplineRequest,
    pub reason: String,
}

/// Result of a successfully issued discipline.
#[derive(Debug, Clone)]
pub struct DisciplineUserResult {
    pub discipline: Discipline,
}

/// Handler for issuing disciplines.
pub struct DisciplineUserHandler {
    users: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
    max_suspension_hours: u32,
}

impl DisciplineUserHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
        max_suspension_hours: u32,
    ) -> Self {
        Self {
            users,
            clock,
            max_suspension_hours,
        }
    }

    pub async fn handle(
        &self,
        cmd: DisciplineUserCommand,
    ) -> Result<DisciplineUserResult, ModerationError> {
        let now = self.clock.now();

        // 1. Load actor and target
        let actor = load_active_actor(self.users.as_ref(), &cmd.actor, now).await?;
        let mut target = load_user(self.users.as_ref(), &cmd.target).await?;

        // 2. Authorize
        if !actor.has_moderation_rights() || !actor.is_higher_authority(&target) {
            warn!(actor = %cmd.actor, target = %cmd.target, "Refused discipline by insufficient authority");
            return Err(ModerationError::forbidden(
                &cmd.actor,
                format!("discipline '{}'", cmd.target),
            ));
        }

        // 3. Build the discipline
        let discipline = match cmd.kind {
            DisciplineRequest::Ban => {
                if target.is_banned(now) {
                    warn!(actor = %cmd.actor, target = %cmd.target, "Refused ban of already banned user");
                    return Err(ModerationError::invalid_request(format!(
                        "'{}' is already banned",
                        cmd.target
                    )));
                }
                Discipline::ban(target.username().clone(), cmd.actor.clone(), now, cmd.reason)?
            }
            DisciplineRequest::Suspension { hours } => {
                if hours > self.max_suspension_hours {
                    return Err(ModerationError::invalid_request(format!(
                        "suspensions are limited to {} hours",
                        self.max_suspension_hours
                    )));
                }
                Discipline::suspension(
                    target.username().clone(),
                    cmd.actor.clone(),
                    now,
                    hours,
                    cmd.reason,
                )?
            }
        };

        // 4. Attach and persist
        target.add_discipline(discipline.clone())?;
        self.users.save(&target).await?;

        info!(
            actor = %cmd.actor,
            target = %cmd.target,
            discipline_id = %discipline.id(),
            kind = %discipline.discipline_type(),
            hours = ?discipline.duration_hours(),
            "User disciplined"
        );

        Ok(DisciplineUserResult { discipline })
    }
}
