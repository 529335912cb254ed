//! LockThreadHandler and UnlockThreadHandler - Command handlers for thread
//! locking.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::handlers::actor::{find_user, load_active_actor};
use crate::application::ModerationError;
use crate::domain::forum::TopicThread;
use crate::domain::foundation::{ThreadId, Username};
use crate::domain::user::User;
use crate::ports::{Clock, ThreadRepository, UserRepository};

/// Command to lock a thread.
#[derive(Debug, Clone)]
pub struct LockThreadCommand {
    pub actor: Username,
    pub thread_id: ThreadId,
}

/// Command to unlock a thread.
#[derive(Debug, Clone)]
pub struct UnlockThreadCommand {
    pub actor: Username,
    pub thread_id: ThreadId,
}

/// Result of a lock or unlock.
#[derive(Debug, Clone)]
pub struct ThreadLockResult {
    pub thread: TopicThread,
}

/// Handler for locking threads.
pub struct LockThreadHandler {
    users: Arc<dyn UserRepository>,
    threads: Arc<dyn ThreadRepository>,
    clock: Arc<dyn Clock>,
}

impl LockThreadHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        threads: Arc<dyn ThreadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            users,
            threads,
            clock,
        }
    }

    pub async fn handle(&self, cmd: LockThreadCommand) -> Result<ThreadLockResult, ModerationError> {
        let now = self.clock.now();

        let actor = load_active_actor(self.users.as_ref(), &cmd.actor, now).await?;
        let mut thread = load_thread(self.threads.as_ref(), &cmd.thread_id).await?;

        let creator = load_named(self.users.as_ref(), thread.creator()).await?;

        if !thread.is_lockable_by(Some(&actor), creator.as_ref()) {
            warn!(actor = %cmd.actor, thread_id = %cmd.thread_id, "Refused thread lock");
            return Err(ModerationError::forbidden(&cmd.actor, "lock this thread"));
        }

        thread.lock(cmd.actor.clone());
        self.threads.save(&thread).await?;
        info!(actor = %cmd.actor, thread_id = %cmd.thread_id, "Thread locked");

        Ok(ThreadLockResult { thread })
    }
}

/// Handler for unlocking threads.
pub struct UnlockThreadHandler {
    users: Arc<dyn UserRepository>,
    threads: Arc<dyn ThreadRepository>,
    clock: Arc<dyn Clock>,
}

impl UnlockThreadHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        threads: Arc<dyn ThreadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            users,
            threads,
            clock,
        }
    }

    pub async fn handle(
        &self,
        cmd: UnlockThreadCommand,
    ) -> Result<ThreadLockResult, ModerationError> {
        let now = self.clock.now();

        let actor = load_active_actor(self.users.as_ref(), &cmd.actor, now).await?;
        let mut thread = load_thread(self.threads.as_ref(), &cmd.thread_id).await?;

        let locker = load_named(self.users.as_ref(), thread.locking_user()).await?;

        if !thread.is_unlockable_by(Some(&actor), locker.as_ref()) {
            warn!(actor = %cmd.actor, thread_id = %cmd.thread_id, "Refused thread unlock");
            return Err(ModerationError::forbidden(&cmd.actor, "unlock this thread"));
        }

        thread.unlock();
        self.threads.save(&thread).await?;
        info!(actor = %cmd.actor, thread_id = %cmd.thread_id, "Thread unlocked");

        Ok(ThreadLockResult { thread })
    }
}

async fn load_named(
    users: &dyn UserRepository,
    username: Option<&Username>,
) -> Result<Option<User>, ModerationError> {
    match username {
        Some(username) => find_user(users, username).await,
        None => Ok(None),
    }
}

async fn load_thread(
    threads: &dyn ThreadRepository,
    id: &ThreadId,
) -> Result<TopicThread, ModerationError> {
    threads
        .find_by_id(id)
        .await?
        .ok_or(ModerationError::ThreadNotFound(*id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::*;
    use crate::domain::foundation::ErrorCode;

    // ════════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn lock_handler(fixture: &Fixture) -> LockThreadHandler {
        LockThreadHandler::new(
            fixture.users.clone(),
            fixture.forum.clone(),
            fixture.clock.clone(),
        )
    }

    fn unlock_handler(fixture: &Fixture) -> UnlockThreadHandler {
        UnlockThreadHandler::new(
            fixture.users.clone(),
            fixture.forum.clone(),
            fixture.clock.clone(),
        )
    }

    fn lock(actor: &str, thread_id: ThreadId) -> LockThreadCommand {
        LockThreadCommand {
            actor: name(actor),
            thread_id,
        }
    }

    fn unlock(actor: &str, thread_id: ThreadId) -> UnlockThreadCommand {
        UnlockThreadCommand {
            actor: name(actor),
            thread_id,
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Lock Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn moderator_locks_members_thread() {
        let fixture = Fixture::new();
        let author = regular("member");
        fixture
            .given_users(&[author.clone(), moderator("moderator")])
            .await;
        let (thread_id, _) = fixture.given_thread_by(&author).await;

        let result = lock_handler(&fixture)
            .handle(lock("moderator", thread_id))
            .await
            .unwrap();

        assert!(result.thread.is_locked());
        let stored = ThreadRepository::find_by_id(fixture.forum.as_ref(), &thread_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.locking_user().unwrap().as_str(), "moderator");
    }

    #[tokio::test]
    async fn moderator_cannot_lock_peer_moderators_thread() {
        let fixture = Fixture::new();
        let author = moderator("author_mod");
        fixture
            .given_users(&[author.clone(), moderator("moderator")])
            .await;
        let (thread_id, _) = fixture.given_thread_by(&author).await;

        let err = lock_handler(&fixture)
            .handle(lock("moderator", thread_id))
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::Forbidden);
    }

    #[tokio::test]
    async fn creator_promoted_after_posting_cannot_be_locked_by_moderator() {
        let fixture = Fixture::new();
        let author = regular("member");
        fixture
            .given_users(&[author.clone(), moderator("moderator")])
            .await;
        let (thread_id, _) = fixture.given_thread_by(&author).await;
        fixture.promote_directly("member").await;

        let err = lock_handler(&fixture)
            .handle(lock("moderator", thread_id))
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::Forbidden);
    }

    #[tokio::test]
    async fn unknown_thread_is_not_found() {
        let fixture = Fixture::new();
        fixture.given_users(&[moderator("moderator")]).await;

        let err = lock_handler(&fixture)
            .handle(lock("moderator", ThreadId::new()))
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::ThreadNotFound);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Unlock Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn higher_authority_unlocks_moderators_lock() {
        let fixture = Fixture::new();
        let author = regular("member");
        fixture
            .given_users(&[author.clone(), moderator("moderator"), administrator("admin")])
            .await;
        let (thread_id, _) = fixture.given_thread_by(&author).await;
        lock_handler(&fixture)
            .handle(lock("moderator", thread_id))
            .await
            .unwrap();

        let result = unlock_handler(&fixture)
            .handle(unlock("admin", thread_id))
            .await
            .unwrap();

        assert!(!result.thread.is_locked());
        assert!(result.thread.locking_user().is_none());
    }

    #[tokio::test]
    async fn locker_promoted_after_locking_is_judged_by_current_rank() {
        let fixture = Fixture::new();
        let author = regular("member");
        fixture
            .given_users(&[author.clone(), moderator("moderator"), administrator("admin")])
            .await;
        let (thread_id, _) = fixture.given_thread_by(&author).await;
        lock_handler(&fixture)
            .handle(lock("moderator", thread_id))
            .await
            .unwrap();
        fixture.promote_directly("moderator").await;

        let err = unlock_handler(&fixture)
            .handle(unlock("admin", thread_id))
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::Forbidden);
    }

    #[tokio::test]
    async fn peer_moderator_cannot_unlock() {
        let fixture = Fixture::new();
        let author = regular("member");
        fixture
            .given_users(&[author.clone(), moderator("moderator"), moderator("other_mod")])
            .await;
        let (thread_id, _) = fixture.given_thread_by(&author).await;
        lock_handler(&fixture)
            .handle(lock("moderator", thread_id))
            .await
            .unwrap();

        let err = unlock_handler(&fixture)
            .handle(unlock("other_mod", thread_id))
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::Forbidden);
    }

    #[tokio::test]
    async fn unlocking_unlocked_thread_is_forbidden() {
        let fixture = Fixture::new();
        let author = regular("member");
        fixture
            .given_users(&[author.clone(), administrator("admin")])
            .await;
        let (thread_id, _) = fixture.given_thread_by(&author).await;

        let err = unlock_handler(&fixture)
            .handle(unlock("admin", thread_id))
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::Forbidden);
    }
}
