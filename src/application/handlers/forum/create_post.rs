//! CreatePostHandler - Command handler for replying to a thread.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::handlers::actor::load_active_actor;
use crate::application::ModerationError;
use crate::domain::forum::Post;
use crate::domain::foundation::{PostId, ThreadId, Username};
use crate::ports::{Clock, ThreadRepository, UserRepository};

/// Command to add a post to an existing thread.
#[derive(Debug, Clone)]
pub struct CreatePostCommand {
    pub actor: Username,
    pub thread_id: ThreadId,
    pub content: String,
}

/// Result of a successful post.
#[derive(Debug, Clone)]
pub struct CreatePostResult {
    pub post: Post,
    /// 1-based page of the thread the new post lands on.
    pub page: u32,
}

/// Handler for adding posts to threads.
pub struct CreatePostHandler {
    users: Arc<dyn UserRepository>,
    threads: Arc<dyn ThreadRepository>,
    clock: Arc<dyn Clock>,
    posts_per_page: u32,
}

impl CreatePostHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        threads: Arc<dyn ThreadRepository>,
        clock: Arc<dyn Clock>,
        posts_per_page: u32,
    ) -> Self {
        Self {
            users,
            threads,
            clock,
            posts_per_page,
        }
    }

    pub async fn handle(&self, cmd: CreatePostCommand) -> Result<CreatePostResult, ModerationError> {
        let now = self.clock.now();

        // 1. Load actor and thread
        load_active_actor(self.users.as_ref(), &cmd.actor, now).await?;
        let mut thread = self
            .threads
            .find_by_id(&cmd.thread_id)
            .await?
            .ok_or(ModerationError::ThreadNotFound(cmd.thread_id))?;

        // 2. Refuse locked threads and blank content
        if !thread.accepts_posts() {
            warn!(actor = %cmd.actor, thread_id = %cmd.thread_id, "Refused post to locked thread");
            return Err(ModerationError::ThreadLocked(cmd.thread_id));
        }
        Post::validate_content(&cmd.content)?;

        // 3. Add and persist
        let post = Post::new(PostId::new(), thread.id(), cmd.actor.clone(), cmd.content, now);
        let post_id = post.id();
        thread.add_post(post.clone());
        self.threads.save(&thread).await?;

        let page = thread.page_of_post(post_id, self.posts_per_page).unwrap_or(1);
        info!(actor = %cmd.actor, thread_id = %cmd.thread_id, post_id = %post_id, page, "Post created");

        Ok(CreatePostResult { post, page })
    }
}
