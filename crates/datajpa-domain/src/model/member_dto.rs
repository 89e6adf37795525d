//! MemberDto - a member joined with its team's name

use serde::{Deserialize, Serialize};

use super::member::{Member, MemberId};
use super::team::Team;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDto {
    pub id: MemberId,
    pub username: String,
    pub team_name: String,
}

impl MemberDto {
    pub fn new(id: MemberId, username: impl Into<String>, team_name: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            team_name: team_name.into(),
        }
    }

    /// Project a persisted member and its team. Transient members have no id
    /// to project and yield `None`.
    pub fn project(member: &Member, team: &Team) -> Option<Self> {
        Some(Self::new(member.id()?, member.username(), team.name()))
    }
}

impl core::fmt::Display for MemberDto {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "MemberDto(id={}, username={}, teamName={})",
            self.id, self.username, self.team_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entity::Entity;

    #[test]
    fn test_project_copies_fields() {
        let mut member = Member::new("memberA").with_age(10);
        member.assign_id(MemberId::new(1));
        let team = Team::new("teamA");

        let dto = MemberDto::project(&member, &team).unwrap();
        assert_eq!(dto, MemberDto::new(MemberId::new(1), "memberA", "teamA"));
        assert_eq!(dto.to_string(), "MemberDto(id=1, username=memberA, teamName=teamA)");
    }

    #[test]
    fn test_transient_member_is_not_projected() {
        let member = Member::new("memberA");
        assert!(MemberDto::project(&member, &Team::new("teamA")).is_none());
    }
}
