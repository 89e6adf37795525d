//! datajpa members command

use anyhow::Context;
use clap::{Args, ValueEnum};
use datajpa_adapter::InMemoryRepositories;
use datajpa_domain::{MemberQuery, MemberRepository, ResultAdapter, ReturnShape, TeamRepository};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShapeArg {
    List,
    Nullable,
    Optional,
}

impl From<ShapeArg> for ReturnShape {
    fn from(shape: ShapeArg) -> Self {
        match shape {
            ShapeArg::List => ReturnShape::List,
            ShapeArg::Nullable => ReturnShape::SingleNullable,
            ShapeArg::Optional => ReturnShape::SingleOptional,
        }
    }
}

#[derive(Debug, Args)]
pub struct MembersCommand {
    /// Exact username
    #[arg(short, long)]
    pub username: Option<String>,

    /// Any of these usernames (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub names: Vec<String>,

    /// Exact age
    #[arg(long)]
    pub age: Option<u32>,

    /// Age strictly greater than
    #[arg(long)]
    pub age_gt: Option<u32>,

    /// Age strictly less than
    #[arg(long)]
    pub age_lt: Option<u32>,

    /// Team name
    #[arg(short, long)]
    pub team: Option<String>,

    /// Return shape to adapt the rows to
    #[arg(short, long, value_enum, default_value_t = ShapeArg::List)]
    pub shape: ShapeArg,
}

impl MembersCommand {
    pub fn query(&self, repos: &InMemoryRepositories) -> anyhow::Result<MemberQuery> {
        let mut query = MemberQuery::new();
        if let Some(username) = &self.username {
            query = query.username_eq(username.as_str());
        }
        if !self.names.is_empty() {
            query = query.username_in(self.names.iter().map(String::as_str));
        }
        if let Some(age) = self.age {
            query = query.age_eq(age);
        }
        if let Some(age) = self.age_gt {
            query = query.age_greater_than(age);
        }
        if let Some(age) = self.age_lt {
            query = query.age_less_than(age);
        }
        if let Some(name) = &self.team {
            let team = repos
                .teams
                .find_by_name(name)?
                .with_context(|| format!("Unknown team '{}'", name))?;
            if let Some(team_id) = team.id() {
                query = query.team_eq(team_id);
            }
        }
        Ok(query)
    }

    pub fn run(&self, repos: &InMemoryRepositories) -> anyhow::Result<()> {
        let query = self.query(repos)?;
        let shape = ReturnShape::from(self.shape);

        let rows = repos.members.find_by(&query)?;
        let adapted = ResultAdapter::new().adapt(rows, shape)?;
        info!("{} ({} shape): {} row(s)", query, shape, adapted.len());

        println!("{}", serde_json::to_string_pretty(&adapted)?);
        Ok(())
    }
}
