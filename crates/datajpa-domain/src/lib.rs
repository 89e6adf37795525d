//! # datajpa Domain Layer
//!
//! Members, teams, and the rules for querying them.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/     - Entities, identifiers, DTO projection         ││
//! │  │  query/     - MemberQuery builder, named query registry     ││
//! │  │  repository/- Trait definitions (not implementations)       ││
//! │  │  service/   - Domain services (ResultAdapter)               ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Storage engines live in `datajpa-adapter`. Everything here is pure:
//! a repository implementation only has to provide CRUD and a predicate
//! lookup, and the derived/named queries are built on top of that.

pub mod model;
pub mod query;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use model::{
    entity::Entity,
    member::{Member, MemberId},
    member_dto::MemberDto,
    team::{Team, TeamId},
};

pub use query::{
    criteria::{MemberPredicate, MemberQuery},
    named::{NamedQueries, NamedQuery, ParamKind, ParamValue, QueryParams},
};

pub use repository::{
    error::RepositoryError,
    member_repository::MemberRepository,
    team_repository::TeamRepository,
};

pub use service::result_adapter::{AdaptedResult, Nullable, ResultAdapter, ReturnShape};
