//! CheckStandingHandler - Query handler for a user's disciplinary standing.

use std::sync::Arc;

use serde::Serialize;

use crate::application::handlers::actor::load_user;
use crate::application::ModerationError;
use crate::domain::foundation::{Timestamp, Username};
use crate::ports::{Clock, UserRepository};

/// Query for a user's current standing.
#[derive(Debug, Clone)]
pub struct CheckStandingQuery {
    pub username: Username,
}

/// A user's standing, derived from their most severe active discipline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Standing {
    Good,
    Suspended { until: Timestamp, reason: String },
    Banned { reason: String },
}

impl Standing {
    pub fn is_good(&self) -> bool {
        matches!(self, Standing::Good)
    }
}

/// Handler for standing queries.
pub struct CheckStandingHandler {
    users: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
}

impl CheckStandingHandler {
    pub fn new(users: Arc<dyn UserRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { users, clock }
    }

    pub async fn handle(&self, query: CheckStandingQuery) -> Result<Standing, ModerationError> {
        let now = self.clock.now();
        let user = load_user(self.users.as_ref(), &query.username).await?;

        let standing = match user.greatest_duration_active_discipline(now) {
            None => Standing::Good,
            Some(discipline) => match discipline.end_time() {
                None => Standing::Banned {
                    reason: discipline.reason().to_string(),
                },
                Some(until) => Standing::Suspended {
                    until,
                    reason: discipline.reason().to_string(),
                },
            },
        };

        Ok(standing)
    }
}
