//! Post entity.
//!
//! A post is one message in a thread. Posts are soft-deleted: content and
//! votes survive deletion, and a deleted post can be restored by whoever
//! deleted it or by somebody who outranks them.
//!
//! Author and deleter are kept by username. Authority checks take the
//! matching user as currently stored, so rank changes after posting or
//! deleting are honoured.

use crate::domain::foundation::{PostId, ThreadId, Timestamp, Username, ValidationError};
use crate::domain::user::User;

use super::PostVote;

/// Appended to content cut short by [`Post::abbreviated_content`].
pub const ELLIPSIS: &str = "...";

/// One message in a thread.
#[derive(Debug, Clone)]
pub struct Post {
    id: PostId,
    thread_id: ThreadId,
    content: String,
    author: Username,
    posted_at: Timestamp,
    deleted: bool,
    deleted_at: Option<Timestamp>,
    deleted_by: Option<Username>,
    votes: Vec<PostVote>,
}

impl Post {
    pub fn new(
        id: PostId,
        thread_id: ThreadId,
        author: Username,
        content: impl Into<String>,
        posted_at: Timestamp,
    ) -> Self {
        Self {
            id,
            thread_id,
            content: content.into(),
            author,
            posted_at,
            deleted: false,
            deleted_at: None,
            deleted_by: None,
            votes: Vec::new(),
        }
    }

    /// # Errors
    ///
    /// `EmptyField` if the content is blank.
    pub fn validate_content(content: &str) -> Result<(), ValidationError> {
        if content.trim().is_empty() {
            return Err(ValidationError::empty_field("content"));
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> PostId {
        self.id
    }

    pub fn thread_id(&self) -> ThreadId {
        self.thread_id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn author(&self) -> &Username {
        &self.author
    }

    pub fn posted_at(&self) -> Timestamp {
        self.posted_at
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    pub fn deleted_at(&self) -> Option<Timestamp> {
        self.deleted_at
    }

    pub fn deleted_by(&self) -> Option<&Username> {
        self.deleted_by.as_ref()
    }

    pub fn votes(&self) -> &[PostVote] {
        &self.votes
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Display
    // ─────────────────────────────────────────────────────────────────────────

    /// Sum of every vote's value.
    pub fn vote_count(&self) -> i64 {
        self.votes.iter().map(|v| i64::from(v.value())).sum()
    }

    /// The content, cut to `max_len` characters plus [`ELLIPSIS`] if longer.
    pub fn abbreviated_content(&self, max_len: usize) -> String {
        if self.content.chars().count() <= max_len {
            return self.content.clone();
        }

        let mut abbreviated: String = self.content.chars().take(max_len).collect();
        abbreviated.push_str(ELLIPSIS);
        abbreviated
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Authorization
    // ─────────────────────────────────────────────────────────────────────────

    /// True if `actor` strictly outranks `author`, the post's author as
    /// currently stored.
    pub fn is_deletable_by(&self, actor: Option<&User>, author: &User) -> bool {
        actor.is_some_and(|actor| {
            author.username() == &self.author && actor.is_higher_authority(author)
        })
    }

    /// True if the post is not deleted, has no recorded deleter, or `actor`
    /// is the deleter or outranks `deleter`, the deleting user as currently
    /// stored.
    pub fn is_restorable_by(&self, actor: Option<&User>, deleter: Option<&User>) -> bool {
        let Some(actor) = actor else {
            return false;
        };

        match (self.deleted, &self.deleted_by) {
            (false, _) | (true, None) => true,
            (true, Some(name)) => actor.is_or_outranks(name, deleter),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Soft-deletes the post. Returns false, changing nothing, if the post
    /// is already deleted.
    pub fn mark_deleted(&mut self, by: Username, at: Timestamp) -> bool {
        if self.deleted {
            return false;
        }

        self.deleted = true;
        self.deleted_at = Some(at);
        self.deleted_by = Some(by);
        true
    }

    /// Clears all soft-delete state.
    pub fn restore(&mut self) {
        self.deleted = false;
        self.deleted_at = None;
        self.deleted_by = None;
    }

    /// Replaces the voter's existing vote, or appends a new one.
    ///
    /// Votes addressed to another post are ignored and false is returned.
    pub fn record_vote(&mut self, vote: PostVote) -> bool {
        if vote.post_id != self.id {
            return false;
        }

        match self.votes.iter_mut().find(|v| v.voter == vote.voter) {
            Some(existing) => *existing = vote,
            None => self.votes.push(vote),
        }
        true
    }

    pub fn vote_by(&self, voter: &Username) -> Option<&PostVote> {
        self.votes.iter().find(|v| &v.voter == voter)
    }
}
