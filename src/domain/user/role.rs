//! Ranked user roles.
//!
//! Every role carries an integer rank. Authority comparisons, promotion and
//! demotion all work off these ranks, never off declaration order.
//!
//! `ChangePasswordPrivilege` is a capability flag rather than an authority:
//! its rank is the minimum integer, so it never counts as anyone's highest
//! authority and is skipped when stepping down the ladder.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// A role a user can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleRank {
    /// Regular member.
    User,
    /// Can moderate regular members.
    Moderator,
    /// Can moderate moderators.
    Administrator,
    /// Highest possible authority.
    SuperAdministrator,
    /// Temporary capability granted during a password reset.
    ChangePasswordPrivilege,
}

/// Roles sorted by ascending rank.
static ROLES_BY_RANK: Lazy<Vec<RoleRank>> = Lazy::new(|| {
    let mut roles = RoleRank::ALL.to_vec();
    roles.sort_by_key(|r| r.rank());
    roles
});

/// Role -> role with the next-greater rank, over all roles.
static NEXT_RANK: Lazy<HashMap<RoleRank, RoleRank>> = Lazy::new(|| {
    ROLES_BY_RANK
        .windows(2)
        .map(|pair| (pair[0], pair[1]))
        .collect()
});

/// Role -> role with the next-lesser rank, over positive ranks only.
static PREVIOUS_RANK: Lazy<HashMap<RoleRank, RoleRank>> = Lazy::new(|| {
    let authorities: Vec<RoleRank> = ROLES_BY_RANK
        .iter()
        .copied()
        .filter(RoleRank::is_authority)
        .collect();
    authorities
        .windows(2)
        .map(|pair| (pair[1], pair[0]))
        .collect()
});

impl RoleRank {
    /// Every role, in declaration order.
    pub const ALL: [RoleRank; 5] = [
        RoleRank::User,
        RoleRank::Moderator,
        RoleRank::Administrator,
        RoleRank::SuperAdministrator,
        RoleRank::ChangePasswordPrivilege,
    ];

    /// Returns the numeric rank of this role.
    pub fn rank(&self) -> i32 {
        match self {
            RoleRank::User => 1,
            RoleRank::Moderator => 2,
            RoleRank::Administrator => 3,
            RoleRank::SuperAdministrator => i32::MAX,
            RoleRank::ChangePasswordPrivilege => i32::MIN,
        }
    }

    /// Returns the display name for this role.
    pub fn display_name(&self) -> &'static str {
        match self {
            RoleRank::User => "User",
            RoleRank::Moderator => "Moderator",
            RoleRank::Administrator => "Administrator",
            RoleRank::SuperAdministrator => "Super Administrator",
            RoleRank::ChangePasswordPrivilege => "Change Password Privilege",
        }
    }

    /// Returns true if this role confers authority (positive rank).
    pub fn is_authority(&self) -> bool {
        self.rank() > 0
    }

    /// Strict rank comparison.
    pub fn is_higher_rank(&self, other: &RoleRank) -> bool {
        self.rank() > other.rank()
    }

    /// The role with the next-greater rank, or `None` at the maximum.
    pub fn next_rank(role: RoleRank) -> Option<RoleRank> {
        NEXT_RANK.get(&role).copied()
    }

    /// The positive-rank role with the next-lesser rank, or `None` if
    /// `role` is already the lowest authority (or not an authority).
    pub fn previous_rank(role: RoleRank) -> Option<RoleRank> {
        PREVIOUS_RANK.get(&role).copied()
    }
}

impl PartialOrd for RoleRank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RoleRank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl std::fmt::Display for RoleRank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn ranks_are_as_published() {
        assert_eq!(RoleRank::User.rank(), 1);
        assert_eq!(RoleRank::Moderator.rank(), 2);
        assert_eq!(RoleRank::Administrator.rank(), 3);
        assert_eq!(RoleRank::SuperAdministrator.rank(), i32::MAX);
        assert_eq!(RoleRank::ChangePasswordPrivilege.rank(), i32::MIN);
    }

    #[test]
    fn is_higher_rank_is_strict() {
        assert!(RoleRank::Administrator.is_higher_rank(&RoleRank::Moderator));
        assert!(!RoleRank::Moderator.is_higher_rank(&RoleRank::Administrator));
        assert!(!RoleRank::Moderator.is_higher_rank(&RoleRank::Moderator));
    }

    #[test]
    fn next_rank_of_moderator_is_administrator() {
        assert_eq!(RoleRank::next_rank(RoleRank::Moderator), Some(RoleRank::Administrator));
    }

    #[test]
    fn next_rank_of_super_administrator_is_none() {
        assert_eq!(RoleRank::next_rank(RoleRank::SuperAdministrator), None);
    }

    #[test]
    fn next_rank_of_change_password_privilege_is_user() {
        assert_eq!(
            RoleRank::next_rank(RoleRank::ChangePasswordPrivilege),
            Some(RoleRank::User)
        );
    }

    #[test]
    fn previous_rank_of_super_administrator_is_administrator() {
        assert_eq!(
            RoleRank::previous_rank(RoleRank::SuperAdministrator),
            Some(RoleRank::Administrator)
        );
    }

    #[test]
    fn previous_rank_of_user_is_none() {
        assert_eq!(RoleRank::previous_rank(RoleRank::User), None);
    }

    #[test]
    fn previous_rank_never_reaches_change_password_privilege() {
        for role in RoleRank::ALL {
            assert_ne!(
                RoleRank::previous_rank(role),
                Some(RoleRank::ChangePasswordPrivilege)
            );
        }
        assert_eq!(RoleRank::previous_rank(RoleRank::ChangePasswordPrivilege), None);
    }

    #[test]
    fn ordering_follows_rank_not_declaration() {
        let mut roles = RoleRank::ALL.to_vec();
        roles.sort();
        assert_eq!(
            roles,
            vec![
                RoleRank::ChangePasswordPrivilege,
                RoleRank::User,
                RoleRank::Moderator,
                RoleRank::Administrator,
                RoleRank::SuperAdministrator,
            ]
        );
    }

    #[test]
    fn only_change_password_privilege_is_not_an_authority() {
        let non_authorities: Vec<_> = RoleRank::ALL
            .into_iter()
            .filter(|r| !r.is_authority())
            .collect();
        assert_eq!(non_authorities, vec![RoleRank::ChangePasswordPrivilege]);
    }

    #[test]
    fn role_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&RoleRank::SuperAdministrator).unwrap();
        assert_eq!(json, "\"SUPER_ADMINISTRATOR\"");
    }

    #[test]
    fn role_deserializes_from_screaming_snake_case() {
        let role: RoleRank = serde_json::from_str("\"MODERATOR\"").unwrap();
        assert_eq!(role, RoleRank::Moderator);
    }

    proptest! {
        #[test]
        fn next_of_previous_is_identity(role in prop::sample::select(RoleRank::ALL.to_vec())) {
            if let Some(previous) = RoleRank::previous_rank(role) {
                prop_assert_eq!(RoleRank::next_rank(previous), Some(role));
            }
        }

        #[test]
        fn next_rank_is_always_higher(role in prop::sample::select(RoleRank::ALL.to_vec())) {
            if let Some(next) = RoleRank::next_rank(role) {
                prop_assert!(next.is_higher_rank(&role));
            }
        }

        #[test]
        fn previous_rank_is_always_lower_authority(role in prop::sample::select(RoleRank::ALL.to_vec())) {
            if let Some(previous) = RoleRank::previous_rank(role) {
                prop_assert!(role.is_higher_rank(&previous));
                prop_assert!(previous.is_authority());
            }
        }
    }
}
