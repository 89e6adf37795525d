//! Team - a named group members can belong to
//!
//! Team is an Entity. Renaming a team does not make it a different team.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Unique identifier for a Team
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(u64);

impl TeamId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for TeamId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<TeamId> for u64 {
    fn from(id: TeamId) -> Self {
        id.0
    }
}

impl core::fmt::Display for TeamId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Assigned on first save
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<TeamId>,
    name: String,
}

impl Team {
    /// Create a transient team
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    pub fn id(&self) -> Option<TeamId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

impl Entity for Team {
    type Id = TeamId;

    const NAME: &'static str = "Team";

    fn id(&self) -> Option<TeamId> {
        self.id
    }

    fn assign_id(&mut self, id: TeamId) {
        self.id = Some(id);
    }
}

impl PartialEq for Team {
    fn eq(&self, other: &Self) -> bool {
        // Entity equality: same persisted ID = same entity
        self.id.is_some() && self.id == other.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_team_is_transient() {
        let team = Team::new("teamA");
        assert!(team.is_new());
        assert_eq!(team.name(), "teamA");
    }

    #[test]
    fn test_entity_equality() {
        let mut a = Team::new("teamA");
        let mut b = Team::new("teamA renamed");
        assert_ne!(a, b);

        a.assign_id(TeamId::new(7));
        b.assign_id(TeamId::new(7));
        assert_eq!(a, b);
    }
}
