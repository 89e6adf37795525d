//! MemberQuery - a conjunction of member predicates
//!
//! ```
//! use datajpa_domain::{Member, MemberQuery};
//!
//! let query = MemberQuery::new().username_eq("memberA").age_greater_than(15);
//!
//! assert!(query.matches(&Member::new("memberA").with_age(20)));
//! assert!(!query.matches(&Member::new("memberA").with_age(10)));
//! assert_eq!(query.to_string(), "where username = 'memberA' and age > 15");
//! ```

use crate::model::member::Member;
use crate::model::team::TeamId;

/// A single condition on a member
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberPredicate {
    UsernameEq(String),
    UsernameIn(Vec<String>),
    AgeEq(u32),
    /// Strictly greater
    AgeGreaterThan(u32),
    /// Strictly less
    AgeLessThan(u32),
    TeamEq(TeamId),
}

impl MemberPredicate {
    pub fn matches(&self, member: &Member) -> bool {
        match self {
            MemberPredicate::UsernameEq(name) => member.username() == name,
            MemberPredicate::UsernameIn(names) => names.iter().any(|n| n == member.username()),
            MemberPredicate::AgeEq(age) => member.age() == *age,
            MemberPredicate::AgeGreaterThan(age) => member.age() > *age,
            MemberPredicate::AgeLessThan(age) => member.age() < *age,
            MemberPredicate::TeamEq(team_id) => member.team_id() == Some(*team_id),
        }
    }
}

impl core::fmt::Display for MemberPredicate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MemberPredicate::UsernameEq(name) => write!(f, "username = '{}'", name),
            MemberPredicate::UsernameIn(names) => {
                let quoted: Vec<String> = names.iter().map(|n| format!("'{}'", n)).collect();
                write!(f, "username in ({})", quoted.join(", "))
            }
            MemberPredicate::AgeEq(age) => write!(f, "age = {}", age),
            MemberPredicate::AgeGreaterThan(age) => write!(f, "age > {}", age),
            MemberPredicate::AgeLessThan(age) => write!(f, "age < {}", age),
            MemberPredicate::TeamEq(team_id) => write!(f, "team = {}", team_id),
        }
    }
}

/// MemberQuery - all predicates must hold. An empty query matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberQuery {
    predicates: Vec<MemberPredicate>,
}

impl MemberQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: add any predicate
    pub fn and(mut self, predicate: MemberPredicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    pub fn username_eq(self, username: impl Into<String>) -> Self {
        self.and(MemberPredicate::UsernameEq(username.into()))
    }

    pub fn username_in(self, usernames: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.and(MemberPredicate::UsernameIn(
            usernames.into_iter().map(Into::into).collect(),
        ))
    }

    pub fn age_eq(self, age: u32) -> Self {
        self.and(MemberPredicate::AgeEq(age))
    }

    pub fn age_greater_than(self, age: u32) -> Self {
        self.and(MemberPredicate::AgeGreaterThan(age))
    }

    pub fn age_less_than(self, age: u32) -> Self {
        self.and(MemberPredicate::AgeLessThan(age))
    }

    pub fn team_eq(self, team_id: TeamId) -> Self {
        self.and(MemberPredicate::TeamEq(team_id))
    }

    pub fn predicates(&self) -> &[MemberPredicate] {
        &self.predicates
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn matches(&self, member: &Member) -> bool {
        self.predicates.iter().all(|p| p.matches(member))
    }
}

impl core::fmt::Display for MemberQuery {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.predicates.is_empty() {
            return write!(f, "<all>");
        }
        let clauses: Vec<String> = self.predicates.iter().map(|p| p.to_string()).collect();
        write!(f, "where {}", clauses.join(" and "))
    }
}
