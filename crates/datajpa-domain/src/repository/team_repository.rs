//! Team Repository - Abstract persistence for Teams

use crate::model::team::{Team, TeamId};
use crate::repository::error::RepositoryError;
use crate::service::result_adapter::ResultAdapter;

/// Team Repository Trait
///
/// This is a PORT in hexagonal architecture.
pub trait TeamRepository {
    /// Save a team (insert if transient, replace otherwise)
    fn save(&mut self, team: Team) -> Result<Team, RepositoryError>;

    fn find_by_id(&self, id: TeamId) -> Result<Option<Team>, RepositoryError>;

    /// All teams, in ID order
    fn find_all(&self) -> Result<Vec<Team>, RepositoryError>;

    fn count(&self) -> Result<usize, RepositoryError>;

    /// Delete a team. Members keep their reference; joins skip them afterwards.
    fn delete(&mut self, team: &Team) -> Result<(), RepositoryError>;

    /// Single team by name; `None` when no team has it
    fn find_by_name(&self, name: &str) -> Result<Option<Team>, RepositoryError> {
        let rows = self
            .find_all()?
            .into_iter()
            .filter(|t| t.name() == name)
            .collect();
        ResultAdapter::new().optional(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entity::Entity;
    use std::collections::BTreeMap;

    #[derive(Default)]
    struct MapTeamRepo {
        teams: BTreeMap<TeamId, Team>,
    }

    impl TeamRepository for MapTeamRepo {
        fn save(&mut self, mut team: Team) -> Result<Team, RepositoryError> {
            if team.is_new() {
                team.assign_id(TeamId::new(self.teams.len() as u64 + 1));
            }
            let id = team.id().ok_or(RepositoryError::TransientEntity { entity: "Team" })?;
            self.teams.insert(id, team.clone());
            Ok(team)
        }

        fn find_by_id(&self, id: TeamId) -> Result<Option<Team>, RepositoryError> {
            Ok(self.teams.get(&id).cloned())
        }

        fn find_all(&self) -> Result<Vec<Team>, RepositoryError> {
            Ok(self.teams.values().cloned().collect())
        }

        fn count(&self) -> Result<usize, RepositoryError> {
            Ok(self.teams.len())
        }

        fn delete(&mut self, team: &Team) -> Result<(), RepositoryError> {
            if let Some(id) = team.id() {
                self.teams.remove(&id);
            }
            Ok(())
        }
    }

    #[test]
    fn test_find_by_name() {
        let mut repo = MapTeamRepo::default();
        let team_a = repo.save(Team::new("teamA")).unwrap();
        repo.save(Team::new("teamB")).unwrap();

        assert_eq!(repo.find_by_name("teamA").unwrap(), Some(team_a));
        assert_eq!(repo.find_by_name("teamC").unwrap(), None);
    }

    #[test]
    fn test_find_by_name_duplicate_is_non_unique() {
        let mut repo = MapTeamRepo::default();
        repo.save(Team::new("teamA")).unwrap();
        repo.save(Team::new("teamA")).unwrap();

        let err = repo.find_by_name("teamA").unwrap_err();
        assert_eq!(err, RepositoryError::NonUniqueResult { actual: 2 });
    }
}
