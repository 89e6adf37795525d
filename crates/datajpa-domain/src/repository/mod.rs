//! Repository Traits - The "Ports" of Hexagonal Architecture
//!
//! These traits define WHAT the domain asks of persistence, not how a
//! storage engine answers it. Implementations live in `datajpa-adapter`.
//!
//! ```text
//! Domain Layer               │  Adapter Layer
//! ───────────────────────────┼──────────────────────────────
//! trait MemberRepository     │  InMemoryMemberRepository
//!   fn save()                │    └─ InMemoryStore<Member>
//!   fn find_by(query)        │
//!   fn find_by_username()  ──┼─ provided: find_by + ResultAdapter
//! ```

pub mod error;
pub mod member_repository;
pub mod team_repository;
