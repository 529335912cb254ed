//! Discipline type definitions.

use serde::{Deserialize, Serialize};

/// The kind of moderation action taken against a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DisciplineType {
    /// Time-bounded; ends on its own after its duration.
    Suspension,
    /// Permanent until rescinded.
    Ban,
}

impl DisciplineType {
    /// Returns the display name for this discipline type.
    pub fn display_name(&self) -> &'static str {
        match self {
            DisciplineType::Suspension => "Suspension",
            DisciplineType::Ban => "Ban",
        }
    }
}

impl std::fmt::Display for DisciplineType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
