//! User aggregate.
//!
//! A user owns two collections: the roles they hold and every discipline
//! ever issued against them. All authority and discipline decisions are
//! answered here as plain booleans or optional values; callers decide what
//! a refusal means.
//!
//! # Invariants
//!
//! - A role appears at most once in `roles`
//! - Every discipline in `disciplines` names this user as disciplined
//! - Two users are the same user iff their usernames match

use std::cmp::Ordering;
use std::collections::BTreeSet;

use secrecy::SecretString;

use crate::domain::discipline::Discipline;
use crate::domain::foundation::{DisciplineId, Timestamp, Username};

use super::{DisciplineError, RoleRank};

/// A forum account.
#[derive(Debug, Clone)]
pub struct User {
    username: Username,
    password: SecretString,
    email: String,
    enabled: bool,
    roles: BTreeSet<RoleRank>,
    disciplines: Vec<Discipline>,
}

impl User {
    /// Creates an enabled user with no roles and no disciplines.
    pub fn new(username: Username, password: SecretString, email: impl Into<String>) -> Self {
        Self {
            username,
            password,
            email: email.into(),
            enabled: true,
            roles: BTreeSet::new(),
            disciplines: Vec::new(),
        }
    }

    /// Grants `roles` and returns the user.
    pub fn with_roles(mut self, roles: impl IntoIterator<Item = RoleRank>) -> Self {
        self.add_authorities(roles);
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Opaque credential material. Never log this.
    pub fn password(&self) -> &SecretString {
        &self.password
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Roles held, in ascending rank order.
    pub fn roles(&self) -> &BTreeSet<RoleRank> {
        &self.roles
    }

    /// Every discipline ever issued against this user, in issue order.
    pub fn disciplines(&self) -> &[Discipline] {
        &self.disciplines
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Authority
    // ─────────────────────────────────────────────────────────────────────────

    /// The highest-ranked role held, ignoring non-authority capabilities.
    pub fn highest_authority(&self) -> Option<RoleRank> {
        self.roles.iter().rev().copied().find(RoleRank::is_authority)
    }

    /// Strict authority comparison.
    ///
    /// A user with any authority outranks a user with none. A user without
    /// authority never outranks anybody.
    pub fn is_higher_authority(&self, other: &User) -> bool {
        match (self.highest_authority(), other.highest_authority()) {
            (Some(mine), Some(theirs)) => mine.is_higher_rank(&theirs),
            (Some(_), None) => true,
            (None, _) => false,
        }
    }

    /// True if this user is the one named `other`, or outranks them.
    ///
    /// `current` is the user named `other` as currently stored; authority is
    /// judged against it rather than against any earlier copy. A `current`
    /// naming somebody else never matches.
    pub fn is_or_outranks(&self, other: &Username, current: Option<&User>) -> bool {
        &self.username == other
            || current.is_some_and(|u| u.username() == other && self.is_higher_authority(u))
    }

    /// The rank a promotion would grant.
    pub fn incremented_rank(&self) -> Option<RoleRank> {
        self.highest_authority().and_then(RoleRank::next_rank)
    }

    /// The rank a demotion would leave as highest authority.
    pub fn decremented_rank(&self) -> Option<RoleRank> {
        self.highest_authority().and_then(RoleRank::previous_rank)
    }

    pub fn is_promotable_by(&self, promoter: &User) -> bool {
        self.incremented_rank().is_some() && promoter.is_higher_authority(self)
    }

    pub fn is_demotable_by(&self, demoter: &User) -> bool {
        self.decremented_rank().is_some() && demoter.is_higher_authority(self)
    }

    pub fn has_authority(&self, role: RoleRank) -> bool {
        self.roles.contains(&role)
    }

    pub fn add_authority(&mut self, role: RoleRank) {
        self.roles.insert(role);
    }

    pub fn add_authorities(&mut self, roles: impl IntoIterator<Item = RoleRank>) {
        self.roles.extend(roles);
    }

    pub fn remove_authority(&mut self, role: RoleRank) {
        self.roles.remove(&role);
    }

    /// Grants the incremented rank, returning it.
    ///
    /// Authorization is the caller's job; see [`User::is_promotable_by`].
    pub fn promote(&mut self) -> Option<RoleRank> {
        let next = self.incremented_rank()?;
        self.add_authority(next);
        Some(next)
    }

    /// Removes the highest authority and makes sure the decremented rank is
    /// held, returning the new highest authority.
    ///
    /// Authorization is the caller's job; see [`User::is_demotable_by`].
    pub fn demote(&mut self) -> Option<RoleRank> {
        let previous = self.decremented_rank()?;
        if let Some(highest) = self.highest_authority() {
            self.remove_authority(highest);
        }
        self.add_authority(previous);
        Some(previous)
    }

    pub fn is_super_administrator(&self) -> bool {
        self.highest_authority() == Some(RoleRank::SuperAdministrator)
    }

    pub fn is_administrator(&self) -> bool {
        self.highest_authority() == Some(RoleRank::Administrator)
    }

    pub fn is_moderator(&self) -> bool {
        self.highest_authority() == Some(RoleRank::Moderator)
    }

    pub fn is_regular_user(&self) -> bool {
        self.highest_authority() == Some(RoleRank::User)
    }

    /// True for moderators and anybody above them.
    pub fn has_moderation_rights(&self) -> bool {
        self.highest_authority()
            .is_some_and(|role| role >= RoleRank::Moderator)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Disciplines
    // ─────────────────────────────────────────────────────────────────────────

    /// Records a discipline issued against this user.
    ///
    /// # Errors
    ///
    /// - `UserMismatch` if the discipline names a different user
    pub fn add_discipline(&mut self, discipline: Discipline) -> Result<(), DisciplineError> {
        if discipline.disciplined_user() != &self.username {
            return Err(DisciplineError::user_mismatch(
                self.username.clone(),
                discipline.disciplined_user().clone(),
            ));
        }

        self.disciplines.push(discipline);
        Ok(())
    }

    pub fn discipline(&self, id: DisciplineId) -> Option<&Discipline> {
        self.disciplines.iter().find(|d| d.id() == id)
    }

    pub fn discipline_mut(&mut self, id: DisciplineId) -> Option<&mut Discipline> {
        self.disciplines.iter_mut().find(|d| d.id() == id)
    }

    pub fn active_disciplines(&self, now: Timestamp) -> Vec<&Discipline> {
        self.disciplines.iter().filter(|d| d.is_active(now)).collect()
    }

    pub fn inactive_disciplines(&self, now: Timestamp) -> Vec<&Discipline> {
        self.disciplines.iter().filter(|d| d.is_over(now)).collect()
    }

    /// The most severe active discipline.
    ///
    /// Bans outrank suspensions; longer suspensions outrank shorter ones;
    /// equal durations fall back to the lowest discipline id.
    pub fn greatest_duration_active_discipline(&self, now: Timestamp) -> Option<&Discipline> {
        self.disciplines
            .iter()
            .filter(|d| d.is_active(now))
            .max_by(|a, b| compare_severity(a, b))
    }

    pub fn is_banned_or_suspended(&self, now: Timestamp) -> bool {
        self.disciplines.iter().any(|d| d.is_active(now))
    }

    pub fn is_banned(&self, now: Timestamp) -> bool {
        self.disciplines
            .iter()
            .any(|d| d.is_ban() && d.is_active(now))
    }
}

fn compare_severity(a: &Discipline, b: &Discipline) -> Ordering {
    a.is_ban()
        .cmp(&b.is_ban())
        .then_with(|| a.duration_hours().cmp(&b.duration_hours()))
        .then_with(|| b.id().cmp(&a.id()))
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.username == other.username
    }
}

impl Eq for User {}
