//! CLI Commands

pub mod demo;
pub mod dto;
pub mod members;
pub mod named;

pub use demo::DemoCommand;
pub use dto::DtoCommand;
pub use members::MembersCommand;
pub use named::NamedCommand;

use std::path::Path;

use datajpa_adapter::{Fixture, InMemoryRepositories};
use tracing::info;

/// Fresh repositories, seeded from `fixture` when given
pub fn load_repositories(fixture: Option<&Path>) -> anyhow::Result<InMemoryRepositories> {
    let mut repos = InMemoryRepositories::new();
    if let Some(path) = fixture {
        let report = Fixture::from_file(path)?.seed(&mut repos.members, &mut repos.teams)?;
        info!(
            "Loaded {:?}: {} teams, {} members",
            path, report.teams, report.members
        );
    }
    Ok(repos)
}
