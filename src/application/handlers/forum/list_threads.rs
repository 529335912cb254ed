//! ListForumThreadsHandler - Query handler for one page of a forum's
//! threads, most recently active first.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::application::ModerationError;
use crate::domain::forum::{sort_threads_by_recent_activity, TopicThread};
use crate::domain::foundation::{ThreadId, Timestamp, Username};
use crate::ports::{ForumRepository, ThreadRepository};

/// Query for a 1-based page of threads in a forum.
#[derive(Debug, Clone)]
pub struct ListForumThreadsQuery {
    pub forum_name: String,
    pub page: u32,
}

/// One row of a forum listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreadSummary {
    pub thread_id: ThreadId,
    pub title: String,
    pub creator: Option<Username>,
    pub created_at: Option<Timestamp>,
    pub last_activity: Option<Timestamp>,
    pub post_count: usize,
    pub locked: bool,
    /// Abbreviated content of the first post.
    pub preview: Option<String>,
}

/// A page of thread summaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForumThreadsPage {
    pub forum_name: String,
    pub page: u32,
    pub total_pages: u32,
    pub threads: Vec<ThreadSummary>,
}

/// Handler for listing a forum's threads.
pub struct ListForumThreadsHandler {
    forums: Arc<dyn ForumRepository>,
    threads: Arc<dyn ThreadRepository>,
    threads_per_page: u32,
    preview_length: usize,
}

impl ListForumThreadsHandler {
    pub fn new(
        forums: Arc<dyn ForumRepository>,
        threads: Arc<dyn ThreadRepository>,
        threads_per_page: u32,
        preview_length: usize,
    ) -> Self {
        Self {
            forums,
            threads,
            threads_per_page,
            preview_length,
        }
    }

    pub async fn handle(
        &self,
        query: ListForumThreadsQuery,
    ) -> Result<ForumThreadsPage, ModerationError> {
        if query.page == 0 || self.threads_per_page == 0 {
            return Err(ModerationError::invalid_request("pages are numbered from 1"));
        }

        let forum = self
            .forums
            .find_by_name(&query.forum_name)
            .await?
            .ok_or_else(|| ModerationError::ForumNotFound(query.forum_name.clone()))?;

        let mut threads = self.threads.find_by_forum(forum.name()).await?;
        sort_threads_by_recent_activity(&mut threads);

        let per_page = self.threads_per_page as usize;
        let total_pages = u32::try_from(threads.len().div_ceil(per_page)).unwrap_or(u32::MAX);
        let skip = (query.page as usize - 1).saturating_mul(per_page);

        let summaries: Vec<ThreadSummary> = threads
            .iter()
            .skip(skip)
            .take(per_page)
            .map(|thread| self.summarize(thread))
            .collect();

        debug!(
            forum = %forum.name(),
            page = query.page,
            total_pages,
            shown = summaries.len(),
            "Listed forum threads"
        );

        Ok(ForumThreadsPage {
            forum_name: forum.name().to_string(),
            page: query.page,
            total_pages,
            threads: summaries,
        })
    }

    fn summarize(&self, thread: &TopicThread) -> ThreadSummary {
        ThreadSummary {
            thread_id: thread.id(),
            title: thread.title().to_string(),
            creator: thread.creator().cloned(),
            created_at: thread.created_at(),
            last_activity: thread.last_post().map(|p| p.posted_at()),
            post_count: thread.posts().len(),
            locked: thread.is_locked(),
            preview: thread
                .first_post()
                .map(|p| p.abbreviated_content(self.preview_length)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::*;
    use crate::domain::forum::{Post, ELLIPSIS};
    use crate::domain::foundation::{ErrorCode, PostId};

    // ════════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn handler(fixture: &Fixture, threads_per_page: u32) -> ListForumThreadsHandler {
        ListForumThreadsHandler::new(
            fixture.forum.clone(),
            fixture.forum.clone(),
            threads_per_page,
            10,
        )
    }

    fn query(forum_name: &str, page: u32) -> ListForumThreadsQuery {
        ListForumThreadsQuery {
            forum_name: forum_name.to_string(),
            page,
        }
    }

    /// Saves a thread in "general" whose only post is made `hours` after
    /// [`start`].
    async fn given_thread_at(fixture: &Fixture, title: &str, hours: i64, content: &str) {
        let mut thread = TopicThread::new(ThreadId::new(), "general", title);
        thread.add_post(Post::new(
            PostId::new(),
            thread.id(),
            name("author"),
            content,
            start().plus_hours(hours),
        ));
        ThreadRepository::save(fixture.forum.as_ref(), &thread)
            .await
            .unwrap();
    }

    fn titles(page: &ForumThreadsPage) -> Vec<&str> {
        page.threads.iter().map(|t| t.title.as_str()).collect()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Paging Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn lists_most_recent_threads_first_in_pages() {
        let fixture = Fixture::new();
        fixture.given_forum().await;
        given_thread_at(&fixture, "Oldest", 1, "a").await;
        given_thread_at(&fixture, "Newest", 3, "b").await;
        given_thread_at(&fixture, "Middle", 2, "c").await;

        let first = handler(&fixture, 2).handle(query("general", 1)).await.unwrap();
        let second = handler(&fixture, 2).handle(query("general", 2)).await.unwrap();

        assert_eq!(first.total_pages, 2);
        assert_eq!(titles(&first), vec!["Newest", "Middle"]);
        assert_eq!(titles(&second), vec!["Oldest"]);
    }

    #[tokio::test]
    async fn page_past_the_end_is_empty() {
        let fixture = Fixture::new();
        fixture.given_forum().await;
        given_thread_at(&fixture, "Only", 1, "a").await;

        let page = handler(&fixture, 25).handle(query("general", 3)).await.unwrap();

        assert_eq!(page.total_pages, 1);
        assert!(page.threads.is_empty());
    }

    #[tokio::test]
    async fn summary_abbreviates_first_post() {
        let fixture = Fixture::new();
        fixture.given_forum().await;
        given_thread_at(&fixture, "Chatter", 1, "A rather long opening message").await;

        let page = handler(&fixture, 25).handle(query("general", 1)).await.unwrap();

        let summary = &page.threads[0];
        assert_eq!(summary.preview.as_deref(), Some(format!("A rather l{}", ELLIPSIS).as_str()));
        assert_eq!(summary.creator, Some(name("author")));
        assert_eq!(summary.post_count, 1);
        assert!(!summary.locked);
    }

    #[tokio::test]
    async fn threads_of_other_forums_are_not_listed() {
        let fixture = Fixture::new();
        fixture.given_forum().await;
        given_thread_at(&fixture, "Here", 1, "a").await;
        let mut elsewhere = TopicThread::new(ThreadId::new(), "offtopic", "Elsewhere");
        elsewhere.add_post(Post::new(PostId::new(), elsewhere.id(), name("author"), "b", start()));
        ThreadRepository::save(fixture.forum.as_ref(), &elsewhere)
            .await
            .unwrap();

        let page = handler(&fixture, 25).handle(query("general", 1)).await.unwrap();

        assert_eq!(titles(&page), vec!["Here"]);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Failure Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn page_zero_is_invalid() {
        let fixture = Fixture::new();
        fixture.given_forum().await;

        let err = handler(&fixture, 25).handle(query("general", 0)).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::InvalidRequest);
    }

    #[tokio::test]
    async fn unknown_forum_is_not_found() {
        let fixture = Fixture::new();

        let err = handler(&fixture, 25).handle(query("nowhere", 1)).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::ForumNotFound);
    }
}
