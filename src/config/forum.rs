//! Forum behaviour configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::discipline::SUSPENSION_MAX_HOURS;

/// Paging, preview and moderation limits
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ForumConfig {
    /// Characters of post content shown before the ellipsis
    #[serde(default = "default_post_preview_length")]
    pub post_preview_length: u32,

    /// Posts per thread page
    #[serde(default = "default_posts_per_page")]
    pub posts_per_page: u32,

    /// Threads per forum page
    #[serde(default = "default_threads_per_page")]
    pub threads_per_page: u32,

    /// Longest suspension a moderator may issue, in hours
    #[serde(default = "default_max_suspension_hours")]
    pub max_suspension_hours: u32,
}

fn default_post_preview_length() -> u32 {
    50
}

fn default_posts_per_page() -> u32 {
    10
}

fn default_threads_per_page() -> u32 {
    25
}

fn default_max_suspension_hours() -> u32 {
    // One year
    8760
}

impl ForumConfig {
    /// Validate forum configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_range("post_preview_length", self.post_preview_length, 1, 1000)?;
        check_range("posts_per_page", self.posts_per_page, 1, 100)?;
        check_range("threads_per_page", self.threads_per_page, 1, 100)?;
        check_range(
            "max_suspension_hours",
            self.max_suspension_hours,
            1,
            SUSPENSION_MAX_HOURS,
        )?;
        Ok(())
    }
}

impl Default for ForumConfig {
    fn default() -> Self {
        Self {
            post_preview_length: default_post_preview_length(),
            posts_per_page: default_posts_per_page(),
            threads_per_page: default_threads_per_page(),
            max_suspension_hours: default_max_suspension_hours(),
        }
    }
}

fn check_range(field: &'static str, actual: u32, min: u32, max: u32) -> Result<(), ValidationError> {
    if (min..=max).contains(&actual) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            min,
            max,
            actual,
        })
    }
}
