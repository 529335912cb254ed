//! Topic thread entity.
//!
//! # Invariants
//!
//! - `posts` is sorted by `posted_at` ascending; posts sharing a timestamp
//!   keep insertion order
//! - `locking_user` is present iff `locked`
//! - A locked thread accepts no new posts

use std::cmp::Ordering;

use crate::domain::foundation::{PostId, ThreadId, Timestamp, Username, ValidationError};
use crate::domain::user::User;

use super::Post;

/// Minimum length of a thread title, in characters.
pub const THREAD_TITLE_MIN_LENGTH: usize = 4;

/// A titled, chronologically ordered sequence of posts within a forum.
#[derive(Debug, Clone)]
pub struct TopicThread {
    id: ThreadId,
    forum_name: String,
    title: String,
    posts: Vec<Post>,
    locked: bool,
    locking_user: Option<Username>,
}

impl TopicThread {
    /// Creates an empty, unlocked thread.
    pub fn new(id: ThreadId, forum_name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id,
            forum_name: forum_name.into(),
            title: title.into(),
            posts: Vec::new(),
            locked: false,
            locking_user: None,
        }
    }

    /// Checks a title for a new thread.
    ///
    /// # Errors
    ///
    /// - `EmptyField` for a blank title
    /// - `InvalidFormat` for a short title or one with characters other than
    ///   letters, digits, `-` and `_`
    pub fn validate_title(title: &str) -> Result<(), ValidationError> {
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        if title.chars().count() < THREAD_TITLE_MIN_LENGTH {
            return Err(ValidationError::invalid_format(
                "title",
                format!("must be at least {} characters long", THREAD_TITLE_MIN_LENGTH),
            ));
        }
        if !title
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ValidationError::invalid_format(
                "title",
                "must consist only of letters, numbers, - and _ characters",
            ));
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> ThreadId {
        self.id
    }

    pub fn forum_name(&self) -> &str {
        &self.forum_name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Posts in chronological order.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn locking_user(&self) -> Option<&Username> {
        self.locking_user.as_ref()
    }

    pub fn first_post(&self) -> Option<&Post> {
        self.posts.first()
    }

    pub fn last_post(&self) -> Option<&Post> {
        self.posts.last()
    }

    /// When the first post was made.
    pub fn created_at(&self) -> Option<Timestamp> {
        self.first_post().map(Post::posted_at)
    }

    /// Author of the first post.
    pub fn creator(&self) -> Option<&Username> {
        self.first_post().map(Post::author)
    }

    pub fn post(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id() == id)
    }

    pub fn post_mut(&mut self, id: PostId) -> Option<&mut Post> {
        self.posts.iter_mut().find(|p| p.id() == id)
    }

    /// 1-based page on which the post appears when paging `per_page` posts
    /// at a time.
    pub fn page_of_post(&self, id: PostId, per_page: u32) -> Option<u32> {
        if per_page == 0 {
            return None;
        }

        let index = self.posts.iter().position(|p| p.id() == id)?;
        u32::try_from(index).ok().map(|i| i / per_page + 1)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Inserts a post in chronological position.
    ///
    /// Posts belonging to another thread are ignored and false is returned.
    pub fn add_post(&mut self, post: Post) -> bool {
        if post.thread_id() != self.id {
            return false;
        }

        let at = post.posted_at();
        let index = self.posts.partition_point(|p| p.posted_at() <= at);
        self.posts.insert(index, post);
        true
    }

    /// True unless the thread is locked.
    pub fn accepts_posts(&self) -> bool {
        !self.locked
    }

    /// Locks the thread. Authorization is the caller's job.
    pub fn lock(&mut self, moderator: Username) {
        self.locked = true;
        self.locking_user = Some(moderator);
    }

    pub fn unlock(&mut self) {
        self.locked = false;
        self.locking_user = None;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Authorization
    // ─────────────────────────────────────────────────────────────────────────

    /// True if the thread is unlocked and `actor` is a moderator who
    /// outranks `creator`, the thread's creator as currently stored.
    pub fn is_lockable_by(&self, actor: Option<&User>, creator: Option<&User>) -> bool {
        let (Some(actor), Some(creator)) = (actor, creator) else {
            return false;
        };

        !self.locked
            && actor.has_moderation_rights()
            && self.creator() == Some(creator.username())
            && actor.is_higher_authority(creator)
    }

    /// True if the thread is locked and `actor` is a moderator who locked
    /// it or outranks `locker`, the locking user as currently stored.
    pub fn is_unlockable_by(&self, actor: Option<&User>, locker: Option<&User>) -> bool {
        let Some(actor) = actor else {
            return false;
        };

        self.locked
            && actor.has_moderation_rights()
            && self
                .locking_user
                .as_ref()
                .is_some_and(|name| actor.is_or_outranks(name, locker))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Ordering
    // ─────────────────────────────────────────────────────────────────────────

    /// Most recently active first; threads without posts last.
    pub fn compare_by_recent_activity(a: &TopicThread, b: &TopicThread) -> Ordering {
        match (a.last_post(), b.last_post()) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(x), Some(y)) => y.posted_at().cmp(&x.posted_at()),
        }
    }
}
