//! Queries - how callers say which members they want
//!
//! `criteria` is the typed builder every lookup ends up as; `named` maps
//! query names and parameters onto that builder.

pub mod criteria;
pub mod named;
