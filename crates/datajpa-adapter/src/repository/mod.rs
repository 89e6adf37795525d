//! Persistence Adapters - Repository implementations
//!
//! `store` is the storage engine: CRUD and predicate lookups over any
//! `Entity`. `in_memory` implements the domain repository traits on it.

pub mod in_memory;
pub mod store;
