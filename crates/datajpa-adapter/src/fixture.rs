//! Fixture - seed data for the repositories
//!
//! ```yaml
//! teams:
//!   - name: teamA
//! members:
//!   - username: memberA
//!     age: 10
//!     team: teamA
//!   - username: memberB
//!     age: 20
//! ```
//!
//! The same shape is accepted as JSON. Teams are saved first; a member's
//! `team` is a team name, resolved against the fixture's own teams and
//! then against teams already in the repository.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use datajpa_domain::model::member::Member;
use datajpa_domain::model::team::Team;
use datajpa_domain::repository::error::RepositoryError;
use datajpa_domain::repository::member_repository::MemberRepository;
use datajpa_domain::repository::team_repository::TeamRepository;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported fixture format '{path}': expected .json, .yaml or .yml")]
    UnsupportedFormat { path: String },

    #[error("Member '{username}' references unknown team '{team}'")]
    UnknownTeam { username: String, team: String },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamFixture {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberFixture {
    pub username: String,

    #[serde(default)]
    pub age: u32,

    /// Team name
    #[serde(default)]
    pub team: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub teams: Vec<TeamFixture>,

    #[serde(default)]
    pub members: Vec<MemberFixture>,
}

/// How many rows `Fixture::seed` saved
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub teams: usize,
    pub members: usize,
}

impl Fixture {
    /// Load a fixture file, picking the format from its extension
    pub fn from_file(path: &Path) -> Result<Self, FixtureError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("json") => Self::from_json_str(&std::fs::read_to_string(path)?),
            Some("yaml") | Some("yml") => Self::from_yaml_str(&std::fs::read_to_string(path)?),
            _ => Err(FixtureError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }

    pub fn from_json_str(content: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, FixtureError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Save every team, then every member.
    ///
    /// Team references are checked before anything is saved, so a fixture
    /// naming an unknown team leaves the repositories untouched.
    pub fn seed<M, T>(&self, members: &mut M, teams: &mut T) -> Result<SeedReport, FixtureError>
    where
        M: MemberRepository,
        T: TeamRepository,
    {
        let declared: HashSet<&str> = self.teams.iter().map(|t| t.name.as_str()).collect();
        let mut existing: HashMap<&str, Team> = HashMap::new();
        for fixture in &self.members {
            let Some(team_name) = fixture.team.as_deref() else {
                continue;
            };
            if declared.contains(team_name) || existing.contains_key(team_name) {
                continue;
            }
            let team = teams
                .find_by_name(team_name)?
                .ok_or_else(|| FixtureError::UnknownTeam {
                    username: fixture.username.clone(),
                    team: team_name.to_string(),
                })?;
            existing.insert(team_name, team);
        }

        let mut saved_teams = existing;
        for team in &self.teams {
            let saved = teams.save(Team::new(team.name.as_str()))?;
            saved_teams.insert(team.name.as_str(), saved);
        }

        for fixture in &self.members {
            let mut member = Member::new(fixture.username.as_str()).with_age(fixture.age);
            if let Some(team) = fixture.team.as_deref().and_then(|name| saved_teams.get(name)) {
                member.set_team(team)?;
            }
            members.save(member)?;
        }

        let report = SeedReport {
            teams: self.teams.len(),
            members: self.members.len(),
        };
        debug!("seeded {} teams, {} members", report.teams, report.members);
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::in_memory::InMemoryRepositories;
    use std::io::Write;

    const YAML: &str = r#"
teams:
  - name: teamA
members:
  - username: memberA
    age: 10
    team: teamA
  - username: memberB
    age: 20
"#;

    #[test]
    fn test_yaml_parsing() {
        let fixture = Fixture::from_yaml_str(YAML).unwrap();

        assert_eq!(fixture.teams, vec![TeamFixture { name: "teamA".to_string() }]);
        assert_eq!(fixture.members.len(), 2);
        assert_eq!(fixture.members[0].team.as_deref(), Some("teamA"));
        assert_eq!(fixture.members[1].team, None);
    }

    #[test]
    fn test_json_defaults() {
        let fixture = Fixture::from_json_str(r#"{"members": [{"username": "memberA"}]}"#).unwrap();

        assert!(fixture.teams.is_empty());
        assert_eq!(fixture.members[0].age, 0);
    }

    #[test]
    fn test_seed() {
        let InMemoryRepositories { mut members, mut teams } = InMemoryRepositories::new();
        let report = Fixture::from_yaml_str(YAML)
            .unwrap()
            .seed(&mut members, &mut teams)
            .unwrap();

        assert_eq!(report, SeedReport { teams: 1, members: 2 });
        assert_eq!(members.count().unwrap(), 2);

        let dtos = members.find_member_dto().unwrap();
        assert_eq!(dtos.len(), 1);
        assert_eq!(dtos[0].team_name, "teamA");
    }

    #[test]
    fn test_seed_resolves_existing_team() {
        let InMemoryRepositories { mut members, mut teams } = InMemoryRepositories::new();
        teams.save(Team::new("existing")).unwrap();

        let fixture = Fixture::from_json_str(
            r#"{"members": [{"username": "memberA", "team": "existing"}]}"#,
        )
        .unwrap();
        fixture.seed(&mut members, &mut teams).unwrap();

        assert_eq!(members.find_member_dto().unwrap()[0].team_name, "existing");
    }

    #[test]
    fn test_seed_unknown_team() {
        let InMemoryRepositories { mut members, mut teams } = InMemoryRepositories::new();
        let fixture = Fixture::from_json_str(
            r#"{"members": [{"username": "memberA", "team": "nowhere"}]}"#,
        )
        .unwrap();

        let err = fixture.seed(&mut members, &mut teams).unwrap_err();
        assert!(matches!(err, FixtureError::UnknownTeam { ref team, .. } if team == "nowhere"));
    }

    #[test]
    fn test_seed_unknown_team_saves_nothing() {
        let InMemoryRepositories { mut members, mut teams } = InMemoryRepositories::new();
        let fixture = Fixture::from_yaml_str(
            r#"
teams:
  - name: teamA
members:
  - username: memberA
    team: teamA
  - username: memberB
    team: nowhere
"#,
        )
        .unwrap();

        let err = fixture.seed(&mut members, &mut teams).unwrap_err();
        assert!(
            matches!(err, FixtureError::UnknownTeam { ref username, .. } if username == "memberB")
        );
        assert_eq!(teams.count().unwrap(), 0);
        assert_eq!(members.count().unwrap(), 0);
    }

    #[test]
    fn test_from_file() {
        let mut yaml = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        yaml.write_all(YAML.as_bytes()).unwrap();
        assert_eq!(Fixture::from_file(yaml.path()).unwrap().members.len(), 2);

        let mut json = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        json.write_all(br#"{"teams": [{"name": "teamA"}]}"#).unwrap();
        assert_eq!(Fixture::from_file(json.path()).unwrap().teams.len(), 1);

        let txt = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        let err = Fixture::from_file(txt.path()).unwrap_err();
        assert!(matches!(err, FixtureError::UnsupportedFormat { .. }));
    }
}
