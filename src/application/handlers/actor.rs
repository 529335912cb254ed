//! Loading the users a command names.

use tracing::warn;

use crate::application::ModerationError;
use crate::domain::foundation::{Timestamp, Username};
use crate::domain::user::User;
use crate::ports::UserRepository;

/// Loads a user or fails with `UserNotFound`.
pub(crate) async fn load_user(
    users: &dyn UserRepository,
    username: &Username,
) -> Result<User, ModerationError> {
    users
        .find_by_username(username)
        .await?
        .ok_or_else(|| ModerationError::UserNotFound(username.clone()))
}

/// Loads a user who may legitimately be missing, such as the author of an
/// old post.
pub(crate) async fn find_user(
    users: &dyn UserRepository,
    username: &Username,
) -> Result<Option<User>, ModerationError> {
    Ok(users.find_by_username(username).await?)
}

/// Loads the acting user, refusing anybody who is banned or suspended at
/// `now`.
pub(crate) async fn load_active_actor(
    users: &dyn UserRepository,
    username: &Username,
    now: Timestamp,
) -> Result<User, ModerationError> {
    let actor = load_user(users, username).await?;
    if actor.is_banned_or_suspended(now) {
        warn!(actor = %username, "Refused command from disciplined user");
        return Err(ModerationError::ActorDisciplined(username.clone()));
    }
    Ok(actor)
}
