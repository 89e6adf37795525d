//! datajpa dto command

use clap::Args;
use datajpa_adapter::InMemoryRepositories;
use datajpa_domain::MemberRepository;
use tracing::info;

#[derive(Debug, Args)]
pub struct DtoCommand {
    /// Print one `MemberDto(...)` line per row instead of JSON
    #[arg(long)]
    pub plain: bool,
}

impl DtoCommand {
    pub fn run(&self, repos: &InMemoryRepositories) -> anyhow::Result<()> {
        let dtos = repos.members.find_member_dto()?;
        info!("{} member(s) with a team", dtos.len());

        if self.plain {
            for dto in &dtos {
                println!("dto = {}", dto);
            }
        } else {
            println!("{}", serde_json::to_string_pretty(&dtos)?);
        }
        Ok(())
    }
}
