//! Domain Services - logic that doesn't belong to a single entity
//!
//! Services are stateless and operate on already-fetched data.

pub mod result_adapter;
