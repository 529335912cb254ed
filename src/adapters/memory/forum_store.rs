//! In-memory forum store.
//!
//! Forums, threads and posts share one store so that a post changed
//! through the post repository shows up the next time its thread is loaded.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::forum::{Post, TopicForum, TopicThread};
use crate::domain::foundation::{DomainError, PostId, ThreadId};
use crate::ports::{ForumRepository, PostRepository, ThreadRepository};

#[derive(Debug, Default)]
struct ForumState {
    forums: HashMap<String, TopicForum>,
    threads: HashMap<ThreadId, TopicThread>,
    posts: HashMap<PostId, StoredPost>,
    next_sequence: u64,
}

#[derive(Debug)]
struct StoredPost {
    sequence: u64,
    post: Post,
}

impl ForumState {
    fn upsert_post(&mut self, post: &Post) {
        match self.posts.get_mut(&post.id()) {
            Some(stored) => stored.post = post.clone(),
            None => {
                let sequence = self.next_sequence;
                self.next_sequence += 1;
                self.posts.insert(
                    post.id(),
                    StoredPost {
                        sequence,
                        post: post.clone(),
                    },
                );
            }
        }
    }

    /// Rebuilds a thread from its stored header and the current posts.
    fn hydrate(&self, id: &ThreadId) -> Option<TopicThread> {
        let stored = self.threads.get(id)?;

        let mut thread = TopicThread::new(stored.id(), stored.forum_name(), stored.title());
        if let Some(locker) = stored.locking_user() {
            thread.lock(locker.clone());
        }

        let mut posts: Vec<&StoredPost> = self
            .posts
            .values()
            .filter(|s| s.post.thread_id() == *id)
            .collect();
        posts.sort_by_key(|s| s.sequence);
        for stored_post in posts {
            thread.add_post(stored_post.post.clone());
        }

        Some(thread)
    }
}

/// In-memory storage for forums, threads and their posts.
///
/// Cloning shares the underlying store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryForumStore {
    state: Arc<RwLock<ForumState>>,
}

impl InMemoryForumStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn forum_count(&self) -> usize {
        self.state.read().await.forums.len()
    }

    pub async fn thread_count(&self) -> usize {
        self.state.read().await.threads.len()
    }

    pub async fn post_count(&self) -> usize {
        self.state.read().await.posts.len()
    }
}

#[async_trait]
impl ForumRepository for InMemoryForumStore {
    async fn find_by_name(&self, name: &str) -> Result<Option<TopicForum>, DomainError> {
        let state = self.state.read().await;
        Ok(state.forums.get(name).cloned())
    }

    async fn save(&self, forum: &TopicForum) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        state.forums.insert(forum.name().to_string(), forum.clone());
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryForumStore {
    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, DomainError> {
        let state = self.state.read().await;
        Ok(state.posts.get(id).map(|s| s.post.clone()))
    }

    async fn save(&self, post: &Post) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        state.upsert_post(post);
        Ok(())
    }
}

#[async_trait]
impl ThreadRepository for InMemoryForumStore {
    async fn find_by_id(&self, id: &ThreadId) -> Result<Option<TopicThread>, DomainError> {
        let state = self.state.read().await;
        Ok(state.hydrate(id))
    }

    async fn find_by_forum(&self, forum_name: &str) -> Result<Vec<TopicThread>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .threads
            .values()
            .filter(|t| t.forum_name() == forum_name)
            .filter_map(|t| state.hydrate(&t.id()))
            .collect())
    }

    async fn save(&self, thread: &TopicThread) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        for post in thread.posts() {
            state.upsert_post(post);
        }
        state.threads.insert(thread.id(), thread.clone());
        Ok(())
    }
}
