//! Member - a person with a username, an age and optionally a team
//!
//! Member is an Entity (has identity). The same MemberId refers to the
//! same member even after the username or age changes.
//!
//! The team is held as a reference (`TeamId`), not a copy. Resolving the
//! reference is the repository's job; see `MemberRepository::find_member_dto`.

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::team::{Team, TeamId};
use crate::repository::error::RepositoryError;

/// Unique identifier for a Member
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(u64);

impl MemberId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for MemberId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<MemberId> for u64 {
    fn from(id: MemberId) -> Self {
        id.0
    }
}

impl core::fmt::Display for MemberId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Member - the central entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Assigned on first save (Entity identity)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<MemberId>,
    username: String,
    #[serde(default)]
    age: u32,
    /// Reference to a persisted team
    #[serde(default, skip_serializing_if = "Option::is_none")]
    team_id: Option<TeamId>,
}

impl Member {
    /// Create a transient member with age 0 and no team
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            id: None,
            username: username.into(),
            age: 0,
            team_id: None,
        }
    }

    /// Builder: set age
    pub fn with_age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    // ========== Getters ==========

    pub fn id(&self) -> Option<MemberId> {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn team_id(&self) -> Option<TeamId> {
        self.team_id
    }

    // ========== Mutations ==========

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    pub fn set_age(&mut self, age: u32) {
        self.age = age;
    }

    /// Point this member at a team.
    ///
    /// The team must already be saved; a transient team has no identifier
    /// to reference.
    pub fn set_team(&mut self, team: &Team) -> Result<(), RepositoryError> {
        let team_id = team.id().ok_or(RepositoryError::TransientEntity {
            entity: Team::NAME,
        })?;
        self.team_id = Some(team_id);
        Ok(())
    }

    pub fn leave_team(&mut self) {
        self.team_id = None;
    }
}

impl Entity for Member {
    type Id = MemberId;

    const NAME: &'static str = "Member";

    fn id(&self) -> Option<MemberId> {
        self.id
    }

    fn assign_id(&mut self, id: MemberId) {
        self.id = Some(id);
    }
}

impl PartialEq for Member {
    fn eq(&self, other: &Self) -> bool {
        // Entity equality: same persisted ID = same entity.
        // Transient members have no identity yet and never compare equal.
        self.id.is_some() && self.id == other.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_creation() {
        let member = Member::new("memberA").with_age(10);

        assert!(member.is_new());
        assert_eq!(member.username(), "memberA");
        assert_eq!(member.age(), 10);
        assert_eq!(member.team_id(), None);
    }

    #[test]
    fn test_default_age_is_zero() {
        assert_eq!(Member::new("memberA").age(), 0);
    }

    #[test]
    fn test_entity_equality() {
        let mut m1 = Member::new("memberA").with_age(10);
        let mut m2 = Member::new("memberA modified").with_age(99);

        // Transient members have no identity
        assert_ne!(m1, m2);
        assert_ne!(m1, m1.clone());

        m1.assign_id(MemberId::new(1));
        m2.assign_id(MemberId::new(1));

        // Same ID = same entity (even if other fields differ)
        assert_eq!(m1, m2);
    }

    #[test]
    fn test_set_team_requires_saved_team() {
        let mut member = Member::new("memberA");
        let mut team = Team::new("teamA");

        let err = member.set_team(&team).unwrap_err();
        assert_eq!(err, RepositoryError::TransientEntity { entity: "Team" });
        assert_eq!(member.team_id(), None);

        team.assign_id(TeamId::new(3));
        member.set_team(&team).unwrap();
        assert_eq!(member.team_id(), Some(TeamId::new(3)));

        member.leave_team();
        assert_eq!(member.team_id(), None);
    }

    #[test]
    fn test_json_shape() {
        let mut member = Member::new("memberA").with_age(20);
        member.assign_id(MemberId::new(5));

        let json = serde_json::to_value(&member).unwrap();
        assert_eq!(json, serde_json::json!({"id": 5, "username": "memberA", "age": 20}));
    }
}
