//! # datajpa Adapter Layer
//!
//! Implementations of the domain's repository ports.
//!
//! ## Structure
//!
//! - `repository/` - the in-memory storage engine and repositories on top of it
//! - `fixture` - seed data loaded from JSON/YAML files

pub mod fixture;
pub mod repository;

pub use fixture::{Fixture, FixtureError, MemberFixture, SeedReport, TeamFixture};
pub use repository::in_memory::{
    InMemoryMemberRepository, InMemoryRepositories, InMemoryTeamRepository,
};
pub use repository::store::InMemoryStore;
