//! Discipline entity.
//!
//! One instance per moderation action issued against a user. A discipline
//! is retained forever as moderation history; the only mutation it accepts
//! is rescission.
//!
//! # Invariants
//!
//! - A suspension lasts between one hour and `SUSPENSION_MAX_HOURS`
//! - A ban has no duration
//! - Once rescinded, a discipline stays rescinded

use crate::domain::foundation::{DisciplineId, Timestamp, Username, ValidationError};
use crate::domain::user::User;

use super::DisciplineType;

/// Minimum length of a discipline reason, in characters.
pub const REASON_MIN_LENGTH: usize = 2;

/// Maximum length of a discipline reason, in characters.
pub const REASON_MAX_LENGTH: usize = 500;

/// Longest suspension the domain accepts: one hundred years.
pub const SUSPENSION_MAX_HOURS: u32 = 24 * 365 * 100;

/// A ban or suspension issued against a user.
#[derive(Debug, Clone)]
pub struct Discipline {
    id: DisciplineId,
    disciplined_user: Username,
    disciplining_user: Username,
    discipline_type: DisciplineType,
    issued_at: Timestamp,
    duration_hours: Option<u32>,
    reason: String,
    rescinded: bool,
}

impl Discipline {
    /// Creates a discipline, validating that its duration matches its type.
    ///
    /// # Errors
    ///
    /// - `Inconsistent` if a ban carries a duration or a suspension lacks one
    /// - `OutOfRange` if a suspension duration is outside
    ///   `1..=SUSPENSION_MAX_HOURS` or the reason length is outside
    ///   `REASON_MIN_LENGTH..=REASON_MAX_LENGTH`
    pub fn new(
        id: DisciplineId,
        disciplined_user: Username,
        disciplining_user: Username,
        discipline_type: DisciplineType,
        issued_at: Timestamp,
        duration_hours: Option<u32>,
        reason: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        match (discipline_type, duration_hours) {
            (DisciplineType::Ban, Some(_)) => {
                return Err(ValidationError::inconsistent(
                    "duration_hours",
                    "a ban must not have a duration",
                ));
            }
            (DisciplineType::Suspension, None) => {
                return Err(ValidationError::inconsistent(
                    "duration_hours",
                    "a suspension must have a duration",
                ));
            }
            (DisciplineType::Suspension, Some(hours))
                if hours == 0 || hours > SUSPENSION_MAX_HOURS =>
            {
                return Err(ValidationError::out_of_range(
                    "duration_hours",
                    1,
                    i64::from(SUSPENSION_MAX_HOURS),
                    i64::from(hours),
                ));
            }
            _ => {}
        }

        let reason = reason.into().trim().to_string();
        let reason_len = reason.chars().count();
        if !(REASON_MIN_LENGTH..=REASON_MAX_LENGTH).contains(&reason_len) {
            return Err(ValidationError::out_of_range(
                "reason",
                REASON_MIN_LENGTH as i64,
                REASON_MAX_LENGTH as i64,
                reason_len as i64,
            ));
        }

        Ok(Self {
            id,
            disciplined_user,
            disciplining_user,
            discipline_type,
            issued_at,
            duration_hours,
            reason,
            rescinded: false,
        })
    }

    /// Creates a permanent ban with a fresh identifier.
    pub fn ban(
        disciplined_user: Username,
        disciplining_user: Username,
        issued_at: Timestamp,
        reason: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::new(
            DisciplineId::new(),
            disciplined_user,
            disciplining_user,
            DisciplineType::Ban,
            issued_at,
            None,
            reason,
        )
    }

    /// Creates a suspension lasting `hours` with a fresh identifier.
    pub fn suspension(
        disciplined_user: Username,
        disciplining_user: Username,
        issued_at: Timestamp,
        hours: u32,
        reason: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::new(
            DisciplineId::new(),
            disciplined_user,
            disciplining_user,
            DisciplineType::Suspension,
            issued_at,
            Some(hours),
            reason,
        )
    }

    pub fn id(&self) -> DisciplineId {
        self.id
    }

    pub fn disciplined_user(&self) -> &Username {
        &self.disciplined_user
    }

    /// Who issued the discipline.
    pub fn disciplining_user(&self) -> &Username {
        &self.disciplining_user
    }

    pub fn discipline_type(&self) -> DisciplineType {
        self.discipline_type
    }

    pub fn issued_at(&self) -> Timestamp {
        self.issued_at
    }

    /// Duration in hours; `None` for bans.
    pub fn duration_hours(&self) -> Option<u32> {
        self.duration_hours
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn is_rescinded(&self) -> bool {
        self.rescinded
    }

    pub fn is_ban(&self) -> bool {
        self.discipline_type == DisciplineType::Ban
    }

    pub fn is_suspension(&self) -> bool {
        self.discipline_type == DisciplineType::Suspension
    }

    /// When a suspension ends; `None` for bans.
    pub fn end_time(&self) -> Option<Timestamp> {
        match self.discipline_type {
            DisciplineType::Ban => None,
            DisciplineType::Suspension => self
                .duration_hours
                .map(|hours| self.issued_at.saturating_plus_hours(i64::from(hours))),
        }
    }

    /// True if rescinded, or if a suspension whose end time `now` is past.
    ///
    /// Bans never end on their own.
    pub fn is_over(&self, now: Timestamp) -> bool {
        if self.rescinded {
            return true;
        }

        match self.end_time() {
            None => false,
            Some(end) => now.is_after(&end),
        }
    }

    pub fn is_active(&self, now: Timestamp) -> bool {
        !self.is_over(now)
    }

    /// Cancels this discipline. Idempotent.
    pub fn rescind(&mut self) {
        self.rescinded = true;
    }

    /// True if `actor` issued this discipline or outranks whoever did.
    ///
    /// `issuer` is the issuing user as currently stored, so a rank change
    /// since the discipline was issued is taken into account.
    pub fn is_rescindable_by(&self, actor: Option<&User>, issuer: Option<&User>) -> bool {
        actor.is_some_and(|actor| actor.is_or_outranks(&self.disciplining_user, issuer))
    }
}
