//! DeletePostHandler - Command handler for soft-deleting posts.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::handlers::actor::{load_active_actor, load_user};
use crate::application::ModerationError;
use crate::domain::forum::Post;
use crate::domain::foundation::{PostId, Username};
use crate::ports::{Clock, PostRepository, UserRepository};

/// Command to delete a post.
#[derive(Debug, Clone)]
pub struct DeletePostCommand {
    pub actor: Username,
    pub post_id: PostId,
}

/// Result of a delete.
#[derive(Debug, Clone)]
pub struct DeletePostResult {
    pub post: Post,
    /// False if the post was already deleted.
    pub changed: bool,
}

/// Handler for deleting posts.
pub struct DeletePostHandler {
    users: Arc<dyn UserRepository>,
    posts: Arc<dyn PostRepository>,
    clock: Arc<dyn Clock>,
}

impl DeletePostHandler {
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

    pub async fn handle(&self, cmd: DeletePostCommand) -> Result<DeletePostResult, ModerationError> {
        let now = self.clock.now();

        let actor = load_active_actor(self.users.as_ref(), &cmd.actor, now).await?;
        let mut post = self
            .posts
            .find_by_id(&cmd.post_id)
            .await?
            .ok_or(ModerationError::PostNotFound(cmd.post_id))?;

        let author = load_user(self.users.as_ref(), post.author()).await?;

        if !post.is_deletable_by(Some(&actor), &author) {
            warn!(actor = %cmd.actor, post_id = %cmd.post_id, "Refused post deletion");
            return Err(ModerationError::forbidden(&cmd.actor, "delete this post"));
        }

        let changed = post.mark_deleted(cmd.actor.clone(), now);
        if changed {
            self.posts.save(&post).await?;
            info!(actor = %cmd.actor, post_id = %cmd.post_id, "Post deleted");
        }

        Ok(DeletePostResult { post, changed })
    }
}
