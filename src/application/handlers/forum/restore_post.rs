//! RestorePostHandler - Command handler for undoing a soft delete.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::handlers::actor::{find_user, load_active_actor};
use crate::application::ModerationError;
use crate::domain::forum::Post;
use crate::domain::foundation::{PostId, Username};
use crate::ports::{Clock, PostRepository, UserRepository};

/// Command to restore a deleted post.
#[derive(Debug, Clone)]
pub struct RestorePostCommand {
    pub actor: Username,
    pub post_id: PostId,
}

/// Result of a restore.
#[derive(Debug, Clone)]
pub struct RestorePostResult {
    pub post: Post,
    /// False if the post was not deleted.
    pub changed: bool,
}

/// Handler for restoring posts.
pub struct RestorePostHandler {
    users: Arc<dyn UserRepository>,
    posts: Arc<dyn PostRepository>,
    clock: Arc<dyn Clock>,
}

impl RestorePostHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        posts: Arc<dyn PostRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            users,
            posts,
            clock,
        }
    }

    pub async fn handle(
        &self,
        cmd: RestorePostCommand,
    ) -> Result<RestorePostResult, ModerationError> {
        let now = self.clock.now();

        let actor = load_active_actor(self.users.as_ref(), &cmd.actor, now).await?;
        let mut post = self
            .posts
            .find_by_id(&cmd.post_id)
            .await?
            .ok_or(ModerationError::PostNotFound(cmd.post_id))?;

        let deleter = match post.deleted_by() {
            Some(deleter) => find_user(self.users.as_ref(), deleter).await?,
            None => None,
        };

        if !post.is_restorable_by(Some(&actor), deleter.as_ref()) {
            warn!(actor = %cmd.actor, post_id = %cmd.post_id, "Refused post restore");
            return Err(ModerationError::forbidden(&cmd.actor, "restore this post"));
        }

        let changed = post.is_deleted();
        if changed {
            post.restore();
            self.posts.save(&post).await?;
            info!(actor = %cmd.actor, post_id = %cmd.post_id, "Post restored");
        }

        Ok(RestorePostResult { post, changed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::forum::{DeletePostCommand, DeletePostHandler};
    use crate::application::handlers::test_support::*;
    use crate::domain::foundation::ErrorCode;

    fn handler(fixture: &Fixture) -> RestorePostHandler {
        RestorePostHandler::new(
            fixture.users.clone(),
            fixture.forum.clone(),
            fixture.clock.clone(),
        )
    }

    async fn delete(fixture: &Fixture, actor: &str, post_id: PostId) {
        DeletePostHandler::new(
            fixture.users.clone(),
            fixture.forum.clone(),
            fixture.clock.clone(),
        )
        .handle(DeletePostCommand {
            actor: name(actor),
            post_id,
        })
        .await
        .unwrap();
    }

    fn command(actor: &str, post_id: PostId) -> RestorePostCommand {
        RestorePostCommand {
            actor: name(actor),
            post_id,
        }
    }

    #[tokio::test]
    async fn super_administrator_restores_post_deleted_by_administrator() {
        let fixture = Fixture::new();
        let author = moderator("moderator");
        fixture
            .given_users(&[
                author.clone(),
                administrator("admin"),
                super_administrator("root"),
            ])
            .await;
        let (_, post_id) = fixture.given_thread_by(&author).await;
        delete(&fixture, "admin", post_id).await;

        let result = handler(&fixture)
            .handle(command("root", post_id))
            .await
            .unwrap();

        assert!(result.changed);
        assert!(!result.post.is_deleted());
        assert!(result.post.deleted_by().is_none());
        assert!(result.post.deleted_at().is_none());
    }

    #[tokio::test]
    async fn peer_administrator_cannot_restore() {
        let fixture = Fixture::new();
        let author = moderator("moderator");
        fixture
            .given_users(&[
                author.clone(),
                administrator("admin"),
                administrator("other_admin"),
            ])
            .await;
        let (_, post_id) = fixture.given_thread_by(&author).await;
        delete(&fixture, "admin", post_id).await;

        let err = handler(&fixture)
            .handle(command("other_admin", post_id))
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::Forbidden);
    }

    #[tokio::test]
    async fn deleter_promoted_after_deleting_is_judged_by_current_rank() {
        let fixture = Fixture::new();
        let author = regular("member");
        fixture
            .given_users(&[
                author.clone(),
                moderator("moderator"),
                administrator("admin"),
            ])
            .await;
        let (_, post_id) = fixture.given_thread_by(&author).await;
        delete(&fixture, "moderator", post_id).await;
        fixture.promote_directly("moderator").await;

        let err = handler(&fixture)
            .handle(command("admin", post_id))
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::Forbidden);
    }

    #[tokio::test]
    async fn restoring_live_post_changes_nothing() {
        let fixture = Fixture::new();
        let author = regular("member");
        fixture.given_users(&[author.clone()]).await;
        let (_, post_id) = fixture.given_thread_by(&author).await;

        let result = handler(&fixture)
            .handle(command("member", post_id))
            .await
            .unwrap();

        assert!(!result.changed);
    }
}
