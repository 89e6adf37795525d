//! Domain Models - the records the repositories persist
//!
//! `Member` and `Team` are entities (identity survives field changes).
//! `MemberDto` is a read-only projection of a member joined with its team.

pub mod entity;
pub mod member;
pub mod member_dto;
pub mod team;
