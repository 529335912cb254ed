//! PromoteUserHandler - Command handler for raising a user's rank.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::handlers::actor::{load_active_actor, load_user};
use crate::application::ModerationError;
use crate::domain::foundation::Username;
use crate::domain::user::{RoleRank, User};
use crate::ports::{Clock, UserRepository};

/// Command to promote a user one rank.
///
/// `requested_rank` must be the rank directly above the target's current
/// highest authority; it guards against acting on a stale view.
#[derive(Debug, Clone)]
pub struct PromoteUserCommand {
    pub actor: Username,
    pub target: Username,
    pub requested_rank: RoleRank,
}

/// Result of a successful promotion.
#[derive(Debug, Clone)]
pub struct PromoteUserResult {
    pub user: User,
    pub new_rank: RoleRank,
}

/// Handler for promoting users.
pub struct PromoteUserHandler {
    users: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
}

impl PromoteUserHandler {
    pub fn new(users: Arc<dyn UserRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { users, clock }
    }

    pub async fn handle(
        &self,
        cmd: PromoteUserCommand,
    ) -> Result<PromoteUserResult, ModerationError> {
        let now = self.clock.now();

        // 1. Load actor and target
        let actor = load_active_actor(self.users.as_ref(), &cmd.actor, now).await?;
        let mut target = load_user(self.users.as_ref(), &cmd.target).await?;

        // 2. Validate the requested rank
        if cmd.requested_rank == RoleRank::SuperAdministrator {
            warn!(actor = %cmd.actor, target = %cmd.target, "Refused promotion to super administrator");
            return Err(ModerationError::invalid_request(
                "promotion to super administrator is not allowed",
            ));
        }
        if target.incremented_rank() != Some(cmd.requested_rank) {
            warn!(
                actor = %cmd.actor,
                target = %cmd.target,
                requested = %cmd.requested_rank,
                "Refused promotion to a rank other than the next one"
            );
            return Err(ModerationError::invalid_request(format!(
                "'{}' cannot be promoted to {}",
                cmd.target, cmd.requested_rank
            )));
        }

        // 3. Authorize
        if !target.is_promotable_by(&actor) {
            warn!(actor = %cmd.actor, target = %cmd.target, "Refused promotion by insufficient authority");
            return Err(ModerationError::forbidden(
                &cmd.actor,
                format!("promote '{}'", cmd.target),
            ));
        }

        if !actor
            .highest_authority()
            .is_some_and(|rank| rank.is_higher_rank(&cmd.requested_rank))
        {
            warn!(
                actor = %cmd.actor,
                target = %cmd.target,
                requested = %cmd.requested_rank,
                "Refused promotion to a rank not below the actor's own"
            );
            return Err(ModerationError::forbidden(
                &cmd.actor,
                format!("promote '{}' to {}", cmd.target, cmd.requested_rank),
            ));
        }

        // 4. Promote and persist
        let new_rank = target.promote().ok_or_else(|| {
            ModerationError::invalid_request(format!("'{}' is already at the highest rank", cmd.target))
        })?;
        self.users.save(&target).await?;

        info!(actor = %cmd.actor, target = %cmd.target, rank = %new_rank, "User promoted");

        Ok(PromoteUserResult {
            user: target,
            new_rank,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::*;
    use crate::domain::foundation::ErrorCode;

    // ════════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn handler(fixture: &Fixture) -> PromoteUserHandler {
        PromoteUserHandler::new(fixture.users.clone(), fixture.clock.clone())
    }

    fn command(actor: &str, target: &str, requested_rank: RoleRank) -> PromoteUserCommand {
        PromoteUserCommand {
            actor: name(actor),
            target: name(target),
            requested_rank,
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Success Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn administrator_promotes_user_to_moderator() {
        let fixture = Fixture::new();
        fixture
            .given_users(&[administrator("admin"), regular("member")])
            .await;

        let result = handler(&fixture)
            .handle(command("admin", "member", RoleRank::Moderator))
            .await
            .unwrap();

        assert_eq!(result.new_rank, RoleRank::Moderator);
        assert!(fixture.user("member").await.is_moderator());
    }

    #[tokio::test]
    async fn super_administrator_promotes_moderator_to_administrator() {
        let fixture = Fixture::new();
        fixture
            .given_users(&[super_administrator("root"), moderator("moderator")])
            .await;

        handler(&fixture)
            .handle(command("root", "moderator", RoleRank::Administrator))
            .await
            .unwrap();

        assert!(fixture.user("moderator").await.is_administrator());
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Failure Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn peer_cannot_promote() {
        let fixture = Fixture::new();
        fixture
            .given_users(&[moderator("moderator"), moderator("other_mod")])
            .await;

        let err = handler(&fixture)
            .handle(command("moderator", "other_mod", RoleRank::Administrator))
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::Forbidden);
        assert!(fixture.user("other_mod").await.is_moderator());
    }

    #[tokio::test]
    async fn administrator_cannot_promote_moderator_to_peer_rank() {
        let fixture = Fixture::new();
        fixture
            .given_users(&[administrator("admin"), moderator("moderator")])
            .await;

        let err = handler(&fixture)
            .handle(command("admin", "moderator", RoleRank::Administrator))
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::Forbidden);
        assert!(!fixture.user("moderator").await.is_administrator());
    }

    #[tokio::test]
    async fn requested_rank_must_be_next_rank() {
        let fixture = Fixture::new();
        fixture
            .given_users(&[super_administrator("root"), regular("member")])
            .await;

        let err = handler(&fixture)
            .handle(command("root", "member", RoleRank::Administrator))
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert!(fixture.user("member").await.is_regular_user());
    }

    #[tokio::test]
    async fn promotion_to_super_administrator_is_refused() {
        let fixture = Fixture::new();
        fixture
            .given_users(&[super_administrator("root"), administrator("admin")])
            .await;

        let err = handler(&fixture)
            .handle(command("root", "admin", RoleRank::SuperAdministrator))
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::InvalidRequest);
    }

    #[tokio::test]
    async fn suspended_actor_cannot_promote() {
        let fixture = Fixture::new();
        fixture
            .given_users(&[administrator("admin"), regular("member")])
            .await;
        fixture.suspend("admin", 24).await;

        let err = handler(&fixture)
            .handle(command("admin", "member", RoleRank::Moderator))
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::ActorDisciplined);
    }

    #[tokio::test]
    async fn actor_may_promote_again_once_suspension_expires() {
        let fixture = Fixture::new();
        fixture
            .given_users(&[administrator("admin"), regular("member")])
            .await;
        fixture.suspend("admin", 24).await;
        fixture.clock.advance_hours(25);

        let result = handler(&fixture)
            .handle(command("admin", "member", RoleRank::Moderator))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn unknown_target_is_not_found() {
        let fixture = Fixture::new();
        fixture.given_users(&[administrator("admin")]).await;

        let err = handler(&fixture)
            .handle(command("admin", "ghost", RoleRank::Moderator))
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::UserNotFound);
    }
}
