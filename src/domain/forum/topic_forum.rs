//! Topic forum: a named category of threads.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

use super::TopicThread;

/// Minimum length of a forum name, in characters.
pub const FORUM_NAME_MIN_LENGTH: usize = 4;

/// Maximum length of a forum description, in characters.
pub const FORUM_DESCRIPTION_MAX_LENGTH: usize = 500;

/// A named forum owning a set of threads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicForum {
    name: String,
    description: String,
}

impl TopicForum {
    /// # Errors
    ///
    /// - `EmptyField` for an empty name or description
    /// - `InvalidFormat` for a short name or one with characters other than
    ///   letters, digits, `-` and `_`
    /// - `OutOfRange` for a description over the maximum length
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let description = description.into();

        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if name.chars().count() < FORUM_NAME_MIN_LENGTH {
            return Err(ValidationError::invalid_format(
                "name",
                format!("must be at least {} characters long", FORUM_NAME_MIN_LENGTH),
            ));
        }
        if !name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ValidationError::invalid_format(
                "name",
                "must consist only of letters, numbers, - and _ characters",
            ));
        }

        let description_len = description.trim().chars().count();
        if description_len == 0 {
            return Err(ValidationError::empty_field("description"));
        }
        if description_len > FORUM_DESCRIPTION_MAX_LENGTH {
            return Err(ValidationError::out_of_range(
                "description",
                1,
                FORUM_DESCRIPTION_MAX_LENGTH as i64,
                description_len as i64,
            ));
        }

        Ok(Self { name, description })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// True if `thread` is filed under this forum.
    pub fn owns(&self, thread: &TopicThread) -> bool {
        thread.forum_name() == self.name
    }
}

/// Sorts threads most recently active first, empty threads last.
pub fn sort_threads_by_recent_activity(threads: &mut [TopicThread]) {
    threads.sort_by(TopicThread::compare_by_recent_activity);
}
