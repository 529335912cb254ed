//! Shared fixtures for handler tests.

use std::sync::Arc;

use secrecy::SecretString;

use crate::adapters::{FixedClock, InMemoryForumStore, InMemoryPostVoteRepository, InMemoryUserRepository};
use crate::domain::discipline::Discipline;
use crate::domain::forum::{Post, TopicForum, TopicThread};
use crate::domain::foundation::{PostId, ThreadId, Timestamp, Username};
use crate::domain::user::{RoleRank, User};
use crate::ports::{ForumRepository, ThreadRepository, UserRepository};

pub(crate) fn start() -> Timestamp {
    Timestamp::from_unix_secs(1_705_276_800)
}

pub(crate) fn name(username: &str) -> Username {
    Username::new(username).unwrap()
}

pub(crate) fn user_with(username: &str, roles: &[RoleRank]) -> User {
    User::new(
        name(username),
        SecretString::new("password".to_string()),
        format!("{}@example.com", username),
    )
    .with_roles(roles.iter().copied())
}

pub(crate) fn regular(username: &str) -> User {
    user_with(username, &[RoleRank::User])
}

pub(crate) fn moderator(username: &str) -> User {
    user_with(username, &[RoleRank::User, RoleRank::Moderator])
}

pub(crate) fn administrator(username: &str) -> User {
    user_with(
        username,
        &[RoleRank::User, RoleRank::Moderator, RoleRank::Administrator],
    )
}

pub(crate) fn super_administrator(username: &str) -> User {
    user_with(
        username,
        &[
            RoleRank::User,
            RoleRank::Moderator,
            RoleRank::Administrator,
            RoleRank::SuperAdministrator,
        ],
    )
}

/// In-memory adapters plus a clock frozen at [`start`].
pub(crate) struct Fixture {
    pub users: Arc<InMemoryUserRepository>,
    pub forum: Arc<InMemoryForumStore>,
    pub votes: Arc<InMemoryPostVoteRepository>,
    pub clock: Arc<FixedClock>,
}

impl Fixture {
    pub(crate) fn new() -> Self {
        Self {
            users: Arc::new(InMemoryUserRepository::new()),
            forum: Arc::new(InMemoryForumStore::new()),
            votes: Arc::new(InMemoryPostVoteRepository::new()),
            clock: Arc::new(FixedClock::new(start())),
        }
    }

    pub(crate) async fn given_users(&self, users: &[User]) {
        for user in users {
            self.users.save(user).await.unwrap();
        }
    }

    pub(crate) async fn user(&self, username: &str) -> User {
        self.users
            .find_by_username(&name(username))
            .await
            .unwrap()
            .unwrap()
    }

    /// Suspends `username` for `hours`, issued at [`start`] by `issuer`.
    pub(crate) async fn suspend(&self, username: &str, hours: u32) {
        let mut user = self.user(username).await;
        let discipline = Discipline::suspension(
            name(username),
            name("issuer"),
            start(),
            hours,
            "Off-topic spam",
        )
        .unwrap();
        user.add_discipline(discipline).unwrap();
        self.users.save(&user).await.unwrap();
    }

    /// Raises `username` by one rank, bypassing the handlers.
    pub(crate) async fn promote_directly(&self, username: &str) {
        let mut user = self.user(username).await;
        user.promote();
        self.users.save(&user).await.unwrap();
    }

    /// Saves the forum named "general".
    pub(crate) async fn given_forum(&self) -> TopicForum {
        let forum = TopicForum::new("general", "General discussion").unwrap();
        ForumRepository::save(self.forum.as_ref(), &forum)
            .await
            .unwrap();
        forum
    }

    /// Saves a thread with one post by `author` and returns both ids.
    pub(crate) async fn given_thread_by(&self, author: &User) -> (ThreadId, PostId) {
        let mut thread = TopicThread::new(ThreadId::new(), "general", "Welcome");
        let post = Post::new(
            PostId::new(),
            thread.id(),
            author.username().clone(),
            "Hello there",
            start(),
        );
        let post_id = post.id();
        thread.add_post(post);
        ThreadRepository::save(self.forum.as_ref(), &thread)
            .await
            .unwrap();
        (thread.id(), post_id)
    }
}
