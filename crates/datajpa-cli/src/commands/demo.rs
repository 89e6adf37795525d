//! datajpa demo command
//!
//! Walks through the repository features one scenario at a time, each
//! against fresh repositories, and logs what every lookup returned.

use anyhow::ensure;
use clap::Args;
use console::style;
use datajpa_adapter::InMemoryRepositories;
use datajpa_domain::{Member, MemberRepository, Nullable, Team, TeamRepository};
use tracing::info;

#[derive(Debug, Args)]
pub struct DemoCommand {
    /// Run only the scenario with this name
    #[arg(short, long)]
    pub only: Option<String>,
}

type Scenario = fn(&mut InMemoryRepositories) -> anyhow::Result<()>;

const SCENARIOS: &[(&str, Scenario)] = &[
    ("save-and-find", save_and_find),
    ("basic-crud", basic_crud),
    ("derived-query", derived_query),
    ("named-query", named_query),
    ("username-list", username_list),
    ("member-dto", member_dto),
    ("find-by-names", find_by_names),
    ("return-types", return_types),
];

impl DemoCommand {
    pub fn scenario_names() -> Vec<&'static str> {
        SCENARIOS.iter().map(|(name, _)| *name).collect()
    }

    pub fn run(&self) -> anyhow::Result<()> {
        let selected: Vec<&(&str, Scenario)> = SCENARIOS
            .iter()
            .filter(|(name, _)| self.only.as_deref().map_or(true, |only| only == *name))
            .collect();
        ensure!(
            !selected.is_empty(),
            "Unknown scenario '{}'. Available: {}",
            self.only.as_deref().unwrap_or_default(),
            Self::scenario_names().join(", ")
        );

        for (name, scenario) in selected {
            info!("");
            info!("{} {}", style("▶").cyan(), name);
            let mut repos = InMemoryRepositories::new();
            scenario(&mut repos)?;
            info!("   {} {}", style("✓").green(), name);
        }

        info!("");
        info!("demo complete");
        Ok(())
    }
}

fn save_and_find(repos: &mut InMemoryRepositories) -> anyhow::Result<()> {
    let saved = repos.members.save(Member::new("memberA"))?;
    let Some(id) = saved.id() else {
        anyhow::bail!("save did not assign an id");
    };
    let found = repos.members.find_by_id(id)?;

    info!("   saved id={} username={}", id, saved.username());
    ensure!(found.as_ref() == Some(&saved), "find_by_id returned {:?}", found);
    Ok(())
}

fn basic_crud(repos: &mut InMemoryRepositories) -> anyhow::Result<()> {
    let member1 = repos.members.save(Member::new("member1"))?;
    let member2 = repos.members.save(Member::new("member2"))?;

    let all = repos.members.find_all()?;
    info!("   find_all -> {} rows, count -> {}", all.len(), repos.members.count()?);
    ensure!(all.len() == 2, "expected 2 members");

    repos.members.delete(&member1)?;
    repos.members.delete(&member2)?;
    let remaining = repos.members.count()?;
    info!("   after delete, count -> {}", remaining);
    ensure!(remaining == 0, "expected no members after delete");
    Ok(())
}

fn derived_query(repos: &mut InMemoryRepositories) -> anyhow::Result<()> {
    repos.members.save(Member::new("memberA").with_age(10))?;
    repos.members.save(Member::new("memberA").with_age(20))?;

    let result = repos.members.find_by_username_and_age_greater_than("memberA", 15)?;
    info!("   username = memberA and age > 15 -> {} row(s)", result.len());
    ensure!(
        result.len() == 1 && result[0].age() == 20,
        "expected only the 20 year old memberA"
    );
    Ok(())
}

fn named_query(repos: &mut InMemoryRepositories) -> anyhow::Result<()> {
    let member1 = repos.members.save(Member::new("memberA").with_age(10))?;
    repos.members.save(Member::new("memberB").with_age(20))?;

    let by_username = repos.members.find_by_username("memberA")?;
    let by_member = repos.members.find_member("memberA", 10)?;
    info!("   Member.findByUsername -> {:?}", by_username.first().map(|m| m.username()));
    info!("   Member.findMember -> {} row(s)", by_member.len());

    ensure!(by_username.first() == Some(&member1), "findByUsername mismatch");
    ensure!(by_member == vec![member1], "findMember mismatch");
    Ok(())
}

fn username_list(repos: &mut InMemoryRepositories) -> anyhow::Result<()> {
    repos.members.save(Member::new("memberA").with_age(10))?;
    repos.members.save(Member::new("memberB").with_age(20))?;

    let usernames = repos.members.find_username_list()?;
    for username in &usernames {
        info!("   s = {}", username);
    }
    ensure!(
        usernames == ["memberA", "memberB"],
        "expected [memberA, memberB], got {:?}",
        usernames
    );
    Ok(())
}

fn member_dto(repos: &mut InMemoryRepositories) -> anyhow::Result<()> {
    let team = repos.teams.save(Team::new("teamA"))?;
    let mut member = Member::new("memberA").with_age(10);
    member.set_team(&team)?;
    repos.members.save(member)?;

    let dtos = repos.members.find_member_dto()?;
    for dto in &dtos {
        info!("   dto = {}", dto);
    }
    ensure!(dtos.len() == 1 && dtos[0].team_name == "teamA", "expected one teamA dto");
    Ok(())
}

fn find_by_names(repos: &mut InMemoryRepositories) -> anyhow::Result<()> {
    repos.members.save(Member::new("memberA").with_age(10))?;
    repos.members.save(Member::new("memberB").with_age(20))?;

    let result = repos.members.find_by_names(&["memberA", "memberB"])?;
    for member in &result {
        info!("   member = {} (age {})", member.username(), member.age());
    }
    ensure!(result.len() == 2, "expected both members");
    Ok(())
}

fn return_types(repos: &mut InMemoryRepositories) -> anyhow::Result<()> {
    repos.members.save(Member::new("memberA").with_age(10))?;
    repos.members.save(Member::new("memberB").with_age(20))?;

    let list = repos.members.find_list_by_username("qweqweqwe")?;
    info!("   list     -> {} row(s), never absent", list.len());
    ensure!(list.is_empty(), "expected an empty list");

    let nullable = repos.members.find_member_by_username("qweqweqwe")?;
    info!("   nullable -> {:?}", nullable);
    ensure!(nullable == Nullable::Null, "expected Null");

    let optional = repos.members.find_optional_by_username("qweqweqwe")?;
    info!("   optional -> {:?}", optional);
    ensure!(optional.is_none(), "expected the empty optional");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_scenarios_pass() {
        DemoCommand { only: None }.run().unwrap();
    }

    #[test]
    fn test_single_scenario() {
        DemoCommand {
            only: Some("return-types".to_string()),
        }
        .run()
        .unwrap();
    }

    #[test]
    fn test_unknown_scenario() {
        let err = DemoCommand {
            only: Some("nope".to_string()),
        }
        .run()
        .unwrap_err();
        assert!(err.to_string().contains("return-types"));
    }
}
