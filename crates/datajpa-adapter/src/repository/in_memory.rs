//! In-Memory Repository Implementations
//!
//! Member and team repositories over `InMemoryStore`. The member
//! repository holds a handle to the team table so it can validate team
//! references and answer the member/team join.

use datajpa_domain::model::entity::Entity;
use datajpa_domain::model::member::{Member, MemberId};
use datajpa_domain::model::member_dto::MemberDto;
use datajpa_domain::model::team::{Team, TeamId};
use datajpa_domain::query::criteria::MemberQuery;
use datajpa_domain::query::named::{NamedQueries, NamedQuery};
use datajpa_domain::repository::error::RepositoryError;
use datajpa_domain::repository::member_repository::MemberRepository;
use datajpa_domain::repository::team_repository::TeamRepository;
use tracing::debug;

use super::store::InMemoryStore;

/// In-memory Team Repository
#[derive(Debug, Clone, Default)]
pub struct InMemoryTeamRepository {
    teams: InMemoryStore<Team>,
}

impl InMemoryTeamRepository {
    pub fn new() -> Self {
        Self {
            teams: InMemoryStore::new(),
        }
    }

    /// The underlying table, shared with member repositories
    pub fn store(&self) -> &InMemoryStore<Team> {
        &self.teams
    }
}

impl TeamRepository for InMemoryTeamRepository {
    fn save(&mut self, team: Team) -> Result<Team, RepositoryError> {
        self.teams.save(team)
    }

    fn find_by_id(&self, id: TeamId) -> Result<Option<Team>, RepositoryError> {
        self.teams.find_by_id(id)
    }

    fn find_all(&self) -> Result<Vec<Team>, RepositoryError> {
        self.teams.find_all()
    }

    fn count(&self) -> Result<usize, RepositoryError> {
        self.teams.count()
    }

    fn delete(&mut self, team: &Team) -> Result<(), RepositoryError> {
        if let Some(id) = team.id() {
            self.teams.remove(id)?;
        }
        Ok(())
    }
}

/// In-memory Member Repository
#[derive(Debug, Clone)]
pub struct InMemoryMemberRepository {
    members: InMemoryStore<Member>,
    teams: InMemoryStore<Team>,
    named: NamedQueries,
}

impl InMemoryMemberRepository {
    /// A member repository that resolves teams through `teams`
    pub fn new(teams: &InMemoryTeamRepository) -> Self {
        Self {
            members: InMemoryStore::new(),
            teams: teams.store().clone(),
            named: NamedQueries::member(),
        }
    }

    /// Builder: register an extra named query
    pub fn with_named_query(mut self, query: NamedQuery) -> Self {
        self.named = self.named.with(query);
        self
    }

    fn check_team_reference(&self, member: &Member) -> Result<(), RepositoryError> {
        if let Some(team_id) = member.team_id() {
            if !self.teams.contains(team_id)? {
                return Err(RepositoryError::ReferenceNotFound {
                    entity: Team::NAME,
                    id: team_id.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl MemberRepository for InMemoryMemberRepository {
    fn save(&mut self, member: Member) -> Result<Member, RepositoryError> {
        self.check_team_reference(&member)?;
        self.members.save(member)
    }

    fn find_by_id(&self, id: MemberId) -> Result<Option<Member>, RepositoryError> {
        self.members.find_by_id(id)
    }

    fn find_all(&self) -> Result<Vec<Member>, RepositoryError> {
        self.members.find_all()
    }

    fn count(&self) -> Result<usize, RepositoryError> {
        self.members.count()
    }

    fn delete(&mut self, member: &Member) -> Result<(), RepositoryError> {
        if let Some(id) = member.id() {
            self.members.remove(id)?;
        }
        Ok(())
    }

    fn delete_by_id(&mut self, id: MemberId) -> Result<(), RepositoryError> {
        if !self.members.remove(id)? {
            return Err(RepositoryError::NotFound {
                entity: Member::NAME,
                id: id.to_string(),
            });
        }
        Ok(())
    }

    fn find_by(&self, query: &MemberQuery) -> Result<Vec<Member>, RepositoryError> {
        let rows = self.members.find_where(|m| query.matches(m))?;
        debug!("select Member {} -> {} rows", query, rows.len());
        Ok(rows)
    }

    fn find_member_dto(&self) -> Result<Vec<MemberDto>, RepositoryError> {
        let mut dtos = Vec::new();
        for member in self.members.find_all()? {
            let Some(team_id) = member.team_id() else {
                continue;
            };
            // Inner join: a dangling team reference drops the row
            if let Some(team) = self.teams.find_by_id(team_id)? {
                dtos.extend(MemberDto::project(&member, &team));
            }
        }
        debug!("select MemberDto join Team -> {} rows", dtos.len());
        Ok(dtos)
    }

    fn named_queries(&self) -> NamedQueries {
        self.named.clone()
    }
}

/// Member and team repositories wired to share the team table
#[derive(Debug, Clone)]
pub struct InMemoryRepositories {
    pub members: InMemoryMemberRepository,
    pub teams: InMemoryTeamRepository,
}

impl InMemoryRepositories {
    pub fn new() -> Self {
        let teams = InMemoryTeamRepository::new();
        let members = InMemoryMemberRepository::new(&teams);
        Self { members, teams }
    }
}

impl Default for InMemoryRepositories {
    fn default() -> Self {
        Self::new()
    }
}
