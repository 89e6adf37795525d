//! ResultAdapter - turns fetched rows into the shape a lookup declares
//!
//! Every lookup runs the same way against storage: a predicate yields
//! zero or more rows. What differs is what the caller asked for:
//!
//! | Shape            | 0 rows          | 1 row           | n rows            |
//! |------------------|-----------------|-----------------|-------------------|
//! | `List`           | `[]`            | `[row]`         | `[row, ..]`       |
//! | `SingleNullable` | `Nullable::Null`| `Value(row)`    | `NonUniqueResult` |
//! | `SingleOptional` | `None`          | `Some(row)`     | `NonUniqueResult` |
//!
//! A list is never absent, only empty. The two single shapes carry absence
//! in two distinct types so callers can't mix them up.
//!
//! This is pure domain logic - no I/O, no locking, no state.

use serde::Serialize;

use crate::repository::error::RepositoryError;

/// The return shape a lookup declares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReturnShape {
    /// Any number of rows, in lookup order
    List,
    /// At most one row; absence is `Nullable::Null`
    SingleNullable,
    /// At most one row; absence is `None`
    SingleOptional,
}

impl ReturnShape {
    pub fn all() -> &'static [ReturnShape] {
        &[
            ReturnShape::List,
            ReturnShape::SingleNullable,
            ReturnShape::SingleOptional,
        ]
    }

    pub fn is_single(&self) -> bool {
        !matches!(self, ReturnShape::List)
    }
}

impl core::fmt::Display for ReturnShape {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            ReturnShape::List => "list",
            ReturnShape::SingleNullable => "nullable",
            ReturnShape::SingleOptional => "optional",
        };
        write!(f, "{}", name)
    }
}

/// A single result that may be null.
///
/// `Null` is what a nullable lookup hands back when it ran and found
/// nothing. Optional lookups use `Option` instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Nullable<T> {
    Value(T),
    Null,
}

impl<T> Nullable<T> {
    pub fn is_null(&self) -> bool {
        matches!(self, Nullable::Null)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Nullable::Value(v) => Some(v),
            Nullable::Null => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Nullable::Value(v) => Some(v),
            Nullable::Null => None,
        }
    }
}

impl<T> From<Nullable<T>> for Option<T> {
    fn from(value: Nullable<T>) -> Self {
        value.into_option()
    }
}

/// The outcome of `ResultAdapter::adapt`, one variant per shape
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AdaptedResult<T> {
    List(Vec<T>),
    Nullable(Nullable<T>),
    Optional(Option<T>),
}

impl<T> AdaptedResult<T> {
    pub fn shape(&self) -> ReturnShape {
        match self {
            AdaptedResult::List(_) => ReturnShape::List,
            AdaptedResult::Nullable(_) => ReturnShape::SingleNullable,
            AdaptedResult::Optional(_) => ReturnShape::SingleOptional,
        }
    }

    /// Whether this is an absence signal. Lists are never absent.
    pub fn is_absent(&self) -> bool {
        match self {
            AdaptedResult::List(_) => false,
            AdaptedResult::Nullable(n) => n.is_null(),
            AdaptedResult::Optional(o) => o.is_none(),
        }
    }

    /// Number of rows carried
    pub fn len(&self) -> usize {
        match self {
            AdaptedResult::List(rows) => rows.len(),
            AdaptedResult::Nullable(n) => usize::from(!n.is_null()),
            AdaptedResult::Optional(o) => usize::from(o.is_some()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// ResultAdapter - the result-shape policy
///
/// Stateless; safe to share or construct per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultAdapter;

impl ResultAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Adapt rows to the declared shape
    pub fn adapt<T>(
        &self,
        rows: Vec<T>,
        shape: ReturnShape,
    ) -> Result<AdaptedResult<T>, RepositoryError> {
        Ok(match shape {
            ReturnShape::List => AdaptedResult::List(self.list(rows)),
            ReturnShape::SingleNullable => AdaptedResult::Nullable(self.nullable(rows)?),
            ReturnShape::SingleOptional => AdaptedResult::Optional(self.optional(rows)?),
        })
    }

    /// List shape: the rows as-is
    pub fn list<T>(&self, rows: Vec<T>) -> Vec<T> {
        rows
    }

    /// SingleNullable shape
    pub fn nullable<T>(&self, rows: Vec<T>) -> Result<Nullable<T>, RepositoryError> {
        Ok(match self.single(rows)? {
            Some(row) => Nullable::Value(row),
            None => Nullable::Null,
        })
    }

    /// SingleOptional shape
    pub fn optional<T>(&self, rows: Vec<T>) -> Result<Option<T>, RepositoryError> {
        self.single(rows)
    }

    fn single<T>(&self, rows: Vec<T>) -> Result<Option<T>, RepositoryError> {
        if rows.len() > 1 {
            return Err(RepositoryError::NonUniqueResult { actual: rows.len() });
        }
        Ok(rows.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entity::Entity;
    use crate::model::member::{Member, MemberId};

    fn saved(id: u64, username: &str, age: u32) -> Member {
        let mut member = Member::new(username).with_age(age);
        member.assign_id(MemberId::new(id));
        member
    }

    #[test]
    fn test_list_of_nothing_is_empty_not_absent() {
        let adapter = ResultAdapter::new();
        let result = adapter.adapt(Vec::<Member>::new(), ReturnShape::List).unwrap();

        assert_eq!(result, AdaptedResult::List(vec![]));
        assert!(!result.is_absent());
        assert!(result.is_empty());
    }

    #[test]
    fn test_list_keeps_lookup_order() {
        let rows = vec![saved(2, "b", 20), saved(1, "a", 10)];
        let list = ResultAdapter::new().list(rows);

        assert_eq!(list[0].id(), Some(MemberId::new(2)));
        assert_eq!(list[1].id(), Some(MemberId::new(1)));
    }

    #[test]
    fn test_nullable_single_row() {
        let member = saved(1, "memberA", 10);
        let result = ResultAdapter::new().nullable(vec![member.clone()]).unwrap();

        assert_eq!(result, Nullable::Value(member));
    }

    #[test]
    fn test_nullable_no_rows_is_null() {
        let result = ResultAdapter::new().nullable(Vec::<Member>::new()).unwrap();

        assert!(result.is_null());
        assert_eq!(result.into_option(), None);
    }

    #[test]
    fn test_optional_no_rows_is_empty_optional() {
        let result = ResultAdapter::new().optional(Vec::<Member>::new()).unwrap();
        assert_eq!(result, None);

        let adapted = ResultAdapter::new()
            .adapt(Vec::<Member>::new(), ReturnShape::SingleOptional)
            .unwrap();
        assert_eq!(adapted, AdaptedResult::Optional(None));
        assert!(adapted.is_absent());
    }

    #[test]
    fn test_nullable_and_optional_absence_are_distinct() {
        let adapter = ResultAdapter::new();
        let nullable = adapter.adapt(Vec::<Member>::new(), ReturnShape::SingleNullable).unwrap();
        let optional = adapter.adapt(Vec::<Member>::new(), ReturnShape::SingleOptional).unwrap();

        assert_ne!(nullable, optional);
        assert_eq!(nullable.shape(), ReturnShape::SingleNullable);
        assert_eq!(optional.shape(), ReturnShape::SingleOptional);
    }

    #[test]
    fn test_single_shapes_reject_multiple_rows() {
        let adapter = ResultAdapter::new();

        for shape in ReturnShape::all().iter().filter(|s| s.is_single()) {
            let rows = vec![saved(1, "memberA", 10), saved(2, "memberA", 20)];
            let err = adapter.adapt(rows, *shape).unwrap_err();
            assert_eq!(err, RepositoryError::NonUniqueResult { actual: 2 });
        }
    }

    #[test]
    fn test_adapted_len() {
        let adapter = ResultAdapter::new();
        let found = adapter
            .adapt(vec![saved(1, "memberA", 10)], ReturnShape::SingleNullable)
            .unwrap();

        assert_eq!(found.len(), 1);
        assert!(!found.is_absent());
    }

    #[test]
    fn test_shape_display() {
        assert_eq!(ReturnShape::List.to_string(), "list");
        assert_eq!(ReturnShape::SingleNullable.to_string(), "nullable");
        assert_eq!(ReturnShape::SingleOptional.to_string(), "optional");
    }
}
