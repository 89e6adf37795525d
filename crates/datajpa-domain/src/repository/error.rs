//! Errors that can occur during repository operations
//!
//! "Nothing found" is not an error here. Single-result lookups report it
//! through `Nullable::Null` or `None`, list lookups through an empty `Vec`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// An operation addressed an identifier with no stored row
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// A single-result lookup matched more than one row
    #[error("query did not return a unique result: {actual} rows matched")]
    NonUniqueResult { actual: usize },

    /// A transient entity was used where a persisted one is required
    #[error("{entity} is transient and has no identifier; save it first")]
    TransientEntity { entity: &'static str },

    /// A saved entity references a row that does not exist
    #[error("referenced {entity} not found: {id}")]
    ReferenceNotFound { entity: &'static str, id: String },

    #[error("unknown named query: {name}")]
    UnknownNamedQuery { name: String },

    #[error("named query '{query}' requires parameter '{param}'")]
    MissingParameter { query: String, param: String },

    #[error("named query '{query}': parameter '{param}' must be {expected}")]
    InvalidParameter {
        query: String,
        param: String,
        expected: &'static str,
    },

    /// The storage engine failed
    #[error("Persistence error: {message}")]
    Persistence { message: String },
}
