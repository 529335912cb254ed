//! CreateThreadHandler - Command handler for starting a thread in a forum.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::handlers::actor::load_active_actor;
use crate::application::ModerationError;
use crate::domain::forum::{Post, TopicThread};
use crate::domain::foundation::{PostId, ThreadId, Username};
use crate::ports::{Clock, ForumRepository, ThreadRepository, UserRepository};

/// Command to start a thread. `content` becomes the first post.
#[derive(Debug, Clone)]
pub struct CreateThreadCommand {
    pub actor: Username,
    pub forum_name: String,
    pub title: String,
    pub content: String,
}

/// Result of a successful thread creation.
#[derive(Debug, Clone)]
pub struct CreateThreadResult {
    pub thread: TopicThread,
}

/// Handler for starting threads.
pub struct CreateThreadHandler {
    users: Arc<dyn UserRepository>,
    forums: Arc<dyn ForumRepository>,
    threads: Arc<dyn ThreadRepository>,
    clock: Arc<dyn Clock>,
}

impl CreateThreadHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        forums: Arc<dyn ForumRepository>,
        threads: Arc<dyn ThreadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            users,
            forums,
            threads,
            clock,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateThreadCommand,
    ) -> Result<CreateThreadResult, ModerationError> {
        let now = self.clock.now();

        // 1. Load the actor and the forum
        load_active_actor(self.users.as_ref(), &cmd.actor, now).await?;
        let forum = self
            .forums
            .find_by_name(&cmd.forum_name)
            .await?
            .ok_or_else(|| ModerationError::ForumNotFound(cmd.forum_name.clone()))?;

        // 2. Validate input
        if let Err(err) = TopicThread::validate_title(&cmd.title)
            .and_then(|()| Post::validate_content(&cmd.content))
        {
            warn!(actor = %cmd.actor, forum = %cmd.forum_name, error = %err, "Refused thread creation");
            return Err(err.into());
        }

        // 3. Build the thread with its first post and persist
        let mut thread = TopicThread::new(ThreadId::new(), forum.name(), cmd.title);
        let post = Post::new(PostId::new(), thread.id(), cmd.actor.clone(), cmd.content, now);
        thread.add_post(post);
        self.threads.save(&thread).await?;

        info!(actor = %cmd.actor, forum = %forum.name(), thread_id = %thread.id(), "Thread created");

        Ok(CreateThreadResult { thread })
    }
}
