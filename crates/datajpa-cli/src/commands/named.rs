//! datajpa named command

use anyhow::bail;
use clap::Args;
use datajpa_adapter::InMemoryRepositories;
use datajpa_domain::{MemberRepository, NamedQuery, ParamValue, QueryParams};
use tracing::info;

#[derive(Debug, Args)]
pub struct NamedCommand {
    /// Query name, e.g. Member.findByUsername
    pub name: Option<String>,

    /// Parameter as key=value, read as the kind the query declares for it
    /// (TextList values are comma-separated)
    #[arg(short, long = "param")]
    pub params: Vec<String>,

    /// List registered query names and their parameters
    #[arg(long)]
    pub list: bool,
}

/// Parse `key=value` into a parameter of the kind `query` declares for `key`
pub fn parse_param(query: &NamedQuery, raw: &str) -> anyhow::Result<(String, ParamValue)> {
    let Some((key, value)) = raw.split_once('=') else {
        bail!("Invalid parameter '{}': expected key=value", raw);
    };
    let key = key.trim();
    if key.is_empty() {
        bail!("Invalid parameter '{}': empty key", raw);
    }

    let Some(kind) = query.param_kind(key) else {
        bail!("'{}' has no parameter '{}'", query.name(), key);
    };
    let Some(value) = kind.parse(value) else {
        bail!("Invalid parameter '{}': expected {}", raw, kind);
    };
    Ok((key.to_string(), value))
}

impl NamedCommand {
    pub fn run(&self, repos: &InMemoryRepositories) -> anyhow::Result<()> {
        let registry = repos.members.named_queries();

        if self.list {
            for name in registry.names() {
                let params = registry
                    .get(name)
                    .map(|q| {
                        q.params()
                            .iter()
                            .map(|(param, kind)| format!("{}: {}", param, kind))
                            .collect::<Vec<_>>()
                            .join(", ")
                    })
                    .unwrap_or_default();
                println!("{}({})", name, params);
            }
            return Ok(());
        }

        let Some(name) = &self.name else {
            bail!("Query name required (or use --list)");
        };
        let Some(query) = registry.get(name) else {
            bail!("Unknown named query '{}'. Available: {}", name, registry.names().join(", "));
        };

        let mut params = QueryParams::new();
        for raw in &self.params {
            let (key, value) = parse_param(query, raw)?;
            params.insert(key, value);
        }

        let members = repos.members.find_by_named(name, &params)?;
        info!("{}: {} row(s)", name, members.len());
        println!("{}", serde_json::to_string_pretty(&members)?);
        Ok(())
    }
}
