//! Member Repository - Abstract persistence for Members
//!
//! An implementation supplies CRUD, one predicate lookup (`find_by`) and
//! the team join behind `find_member_dto`. Every derived and named lookup
//! is a provided method that builds a `MemberQuery`, runs it through
//! `find_by`, and adapts the rows to its return shape.

use crate::model::member::{Member, MemberId};
use crate::model::member_dto::MemberDto;
use crate::query::criteria::MemberQuery;
use crate::query::named::{self, NamedQueries, ParamValue, QueryParams};
use crate::repository::error::RepositoryError;
use crate::service::result_adapter::{Nullable, ResultAdapter};

/// Member Repository Trait
///
/// This is a PORT in hexagonal architecture.
///
/// Note: No async here - that's an implementation detail.
pub trait MemberRepository {
    /// Save a member (insert if transient, replace otherwise).
    /// Returns the stored member with its identifier assigned.
    fn save(&mut self, member: Member) -> Result<Member, RepositoryError>;

    /// Find a member by ID
    fn find_by_id(&self, id: MemberId) -> Result<Option<Member>, RepositoryError>;

    /// All members, in ID order
    fn find_all(&self) -> Result<Vec<Member>, RepositoryError>;

    /// Count all members
    fn count(&self) -> Result<usize, RepositoryError>;

    /// Delete a member. Transient or already-deleted members are ignored.
    fn delete(&mut self, member: &Member) -> Result<(), RepositoryError>;

    /// Delete by ID; an unknown ID is `NotFound`
    fn delete_by_id(&mut self, id: MemberId) -> Result<(), RepositoryError>;

    /// Members matching every predicate of `query`, in ID order
    fn find_by(&self, query: &MemberQuery) -> Result<Vec<Member>, RepositoryError>;

    /// Members joined with their team. Members without a (live) team are skipped.
    fn find_member_dto(&self) -> Result<Vec<MemberDto>, RepositoryError>;

    /// Named queries this repository answers
    fn named_queries(&self) -> NamedQueries {
        NamedQueries::member()
    }

    /// Check if a member exists
    fn exists_by_id(&self, id: MemberId) -> Result<bool, RepositoryError> {
        Ok(self.find_by_id(id)?.is_some())
    }

    // ========== Derived queries ==========

    fn find_by_username_and_age_greater_than(
        &self,
        username: &str,
        age: u32,
    ) -> Result<Vec<Member>, RepositoryError> {
        let query = MemberQuery::new().username_eq(username).age_greater_than(age);
        Ok(ResultAdapter::new().list(self.find_by(&query)?))
    }

    fn find_list_by_username(&self, username: &str) -> Result<Vec<Member>, RepositoryError> {
        let query = MemberQuery::new().username_eq(username);
        Ok(ResultAdapter::new().list(self.find_by(&query)?))
    }

    /// Single member by username; `Null` when nobody has it
    fn find_member_by_username(&self, username: &str) -> Result<Nullable<Member>, RepositoryError> {
        let query = MemberQuery::new().username_eq(username);
        ResultAdapter::new().nullable(self.find_by(&query)?)
    }

    /// Single member by username; `None` when nobody has it
    fn find_optional_by_username(&self, username: &str) -> Result<Option<Member>, RepositoryError> {
        let query = MemberQuery::new().username_eq(username);
        ResultAdapter::new().optional(self.find_by(&query)?)
    }

    /// Usernames of all members, in ID order
    fn find_username_list(&self) -> Result<Vec<String>, RepositoryError> {
        let usernames = self
            .find_all()?
            .into_iter()
            .map(|m| m.username().to_string())
            .collect();
        Ok(ResultAdapter::new().list(usernames))
    }

    // ========== Named queries ==========

    /// Run a named query by name
    fn find_by_named(
        &self,
        name: &str,
        params: &QueryParams,
    ) -> Result<Vec<Member>, RepositoryError> {
        let query = self.named_queries().resolve(name, params)?;
        Ok(ResultAdapter::new().list(self.find_by(&query)?))
    }

    fn find_by_username(&self, username: &str) -> Result<Vec<Member>, RepositoryError> {
        let params = QueryParams::new().with("username", username);
        self.find_by_named(named::FIND_BY_USERNAME, &params)
    }

    fn find_member(&self, username: &str, age: u32) -> Result<Vec<Member>, RepositoryError> {
        let params = QueryParams::new()
            .with("username", username)
            .with("age", i64::from(age));
        self.find_by_named(named::FIND_MEMBER, &params)
    }

    fn find_by_names(&self, names: &[&str]) -> Result<Vec<Member>, RepositoryError> {
        let names = names.iter().map(|n| n.to_string()).collect();
        let params = QueryParams::new().with("names", ParamValue::TextList(names));
        self.find_by_named(named::FIND_BY_NAMES, &params)
    }
}
