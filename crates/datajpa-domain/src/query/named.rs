//! Named queries - lookups registered under a name with named parameters
//!
//! A named query is a template: given parameters it produces a
//! `MemberQuery`. There is no query language to parse; each template is a
//! plain function over `QueryParams`.
//!
//! Standard member queries:
//!
//! | Name                    | Parameters                     |
//! |-------------------------|--------------------------------|
//! | `Member.findByUsername` | `username: Text`               |
//! | `Member.findMember`     | `username: Text`, `age: Int`   |
//! | `Member.findByNames`    | `names: TextList`              |

use std::collections::{BTreeMap, HashMap};

use super::criteria::MemberQuery;
use crate::repository::error::RepositoryError;

pub const FIND_BY_USERNAME: &str = "Member.findByUsername";
pub const FIND_MEMBER: &str = "Member.findMember";
pub const FIND_BY_NAMES: &str = "Member.findByNames";

/// A bound parameter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Text(String),
    Int(i64),
    TextList(Vec<String>),
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(value: Vec<String>) -> Self {
        ParamValue::TextList(value)
    }
}

/// The kind of value a named query expects for a parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    Text,
    Int,
    TextList,
}

impl ParamKind {
    /// Read a raw string as this kind. `Text` takes the string verbatim;
    /// `TextList` splits on commas. Returns `None` when an `Int` doesn't parse.
    pub fn parse(&self, raw: &str) -> Option<ParamValue> {
        match self {
            ParamKind::Text => Some(ParamValue::Text(raw.to_string())),
            ParamKind::Int => raw.trim().parse::<i64>().ok().map(ParamValue::Int),
            ParamKind::TextList => Some(ParamValue::TextList(
                raw.split(',').map(|s| s.trim().to_string()).collect(),
            )),
        }
    }
}

impl core::fmt::Display for ParamKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            ParamKind::Text => "Text",
            ParamKind::Int => "Int",
            ParamKind::TextList => "TextList",
        };
        write!(f, "{}", name)
    }
}

/// Parameters bound by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    values: HashMap<String, ParamValue>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: bind a parameter
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn require(&self, query: &str, param: &str) -> Result<&ParamValue, RepositoryError> {
        self.get(param).ok_or_else(|| RepositoryError::MissingParameter {
            query: query.to_string(),
            param: param.to_string(),
        })
    }

    /// A `Text` parameter
    pub fn text(&self, query: &str, param: &str) -> Result<&str, RepositoryError> {
        match self.require(query, param)? {
            ParamValue::Text(s) => Ok(s),
            _ => Err(invalid(query, param, "text")),
        }
    }

    /// An `Int` parameter that fits an age (`u32`)
    pub fn age(&self, query: &str, param: &str) -> Result<u32, RepositoryError> {
        match self.require(query, param)? {
            ParamValue::Int(n) => {
                u32::try_from(*n)
                    .map_err(|_| invalid(query, param, "a non-negative 32-bit integer"))
            }
            _ => Err(invalid(query, param, "a non-negative 32-bit integer")),
        }
    }

    /// A `TextList` parameter. A single `Text` counts as a one-element list.
    pub fn text_list(&self, query: &str, param: &str) -> Result<Vec<String>, RepositoryError> {
        match self.require(query, param)? {
            ParamValue::TextList(v) => Ok(v.clone()),
            ParamValue::Text(s) => Ok(vec![s.clone()]),
            ParamValue::Int(_) => Err(invalid(query, param, "a list of text values")),
        }
    }
}

fn invalid(query: &str, param: &str, expected: &'static str) -> RepositoryError {
    RepositoryError::InvalidParameter {
        query: query.to_string(),
        param: param.to_string(),
        expected,
    }
}

/// Template that turns bound parameters into a query
pub type QueryTemplate = fn(&QueryParams) -> Result<MemberQuery, RepositoryError>;

#[derive(Debug, Clone, Copy)]
pub struct NamedQuery {
    name: &'static str,
    params: &'static [(&'static str, ParamKind)],
    template: QueryTemplate,
}

impl NamedQuery {
    pub fn new(
        name: &'static str,
        params: &'static [(&'static str, ParamKind)],
        template: QueryTemplate,
    ) -> Self {
        Self {
            name,
            params,
            template,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Declared parameters, in declaration order
    pub fn params(&self) -> &'static [(&'static str, ParamKind)] {
        self.params
    }

    pub fn param_kind(&self, param: &str) -> Option<ParamKind> {
        self.params
            .iter()
            .find(|(name, _)| *name == param)
            .map(|(_, kind)| *kind)
    }

    pub fn bind(&self, params: &QueryParams) -> Result<MemberQuery, RepositoryError> {
        (self.template)(params)
    }
}

/// Registry of named queries
#[derive(Debug, Clone, Default)]
pub struct NamedQueries {
    queries: BTreeMap<&'static str, NamedQuery>,
}

impl NamedQueries {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard member queries
    pub fn member() -> Self {
        Self::new()
            .with(NamedQuery::new(
                FIND_BY_USERNAME,
                &[("username", ParamKind::Text)],
                |p| Ok(MemberQuery::new().username_eq(p.text(FIND_BY_USERNAME, "username")?)),
            ))
            .with(NamedQuery::new(
                FIND_MEMBER,
                &[("username", ParamKind::Text), ("age", ParamKind::Int)],
                |p| {
                    Ok(MemberQuery::new()
                        .username_eq(p.text(FIND_MEMBER, "username")?)
                        .age_eq(p.age(FIND_MEMBER, "age")?))
                },
            ))
            .with(NamedQuery::new(
                FIND_BY_NAMES,
                &[("names", ParamKind::TextList)],
                |p| Ok(MemberQuery::new().username_in(p.text_list(FIND_BY_NAMES, "names")?)),
            ))
    }

    /// Builder: register a query, replacing any query with the same name
    pub fn with(mut self, query: NamedQuery) -> Self {
        self.queries.insert(query.name(), query);
        self
    }

    pub fn get(&self, name: &str) -> Option<&NamedQuery> {
        self.queries.get(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&'static str> {
        self.queries.keys().copied().collect()
    }

    /// Look up a query by name and bind its parameters
    pub fn resolve(
        &self,
        name: &str,
        params: &QueryParams,
    ) -> Result<MemberQuery, RepositoryError> {
        let query = self.get(name).ok_or_else(|| RepositoryError::UnknownNamedQuery {
            name: name.to_string(),
        })?;
        query.bind(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_registry() {
        let queries = NamedQueries::member();
        assert_eq!(
            queries.names(),
            vec![FIND_BY_NAMES, FIND_BY_USERNAME, FIND_MEMBER]
        );
        let find_member = queries.get(FIND_MEMBER).unwrap();
        assert_eq!(
            find_member.params(),
            &[("username", ParamKind::Text), ("age", ParamKind::Int)]
        );
        assert_eq!(find_member.param_kind("age"), Some(ParamKind::Int));
        assert_eq!(find_member.param_kind("names"), None);
    }

    #[test]
    fn test_param_kind_parse() {
        // Declared text stays text, even when it looks like a number or a list
        assert_eq!(ParamKind::Text.parse("123"), Some(ParamValue::Text("123".to_string())));
        assert_eq!(
            ParamKind::Text.parse("Kim, Jr"),
            Some(ParamValue::Text("Kim, Jr".to_string()))
        );
        assert_eq!(ParamKind::Int.parse("10"), Some(ParamValue::Int(10)));
        assert_eq!(ParamKind::Int.parse("ten"), None);
        assert_eq!(
            ParamKind::TextList.parse("memberA, memberB"),
            Some(ParamValue::TextList(vec!["memberA".to_string(), "memberB".to_string()]))
        );
    }

    #[test]
    fn test_resolve_find_by_username() {
        let params = QueryParams::new().with("username", "memberA");
        let query = NamedQueries::member().resolve(FIND_BY_USERNAME, &params).unwrap();

        assert_eq!(query, MemberQuery::new().username_eq("memberA"));
    }

    #[test]
    fn test_resolve_find_member() {
        let params = QueryParams::new().with("username", "memberA").with("age", 10i64);
        let query = NamedQueries::member().resolve(FIND_MEMBER, &params).unwrap();

        assert_eq!(query, MemberQuery::new().username_eq("memberA").age_eq(10));
    }

    #[test]
    fn test_resolve_find_by_names_accepts_single_text() {
        let params = QueryParams::new().with("names", "memberA");
        let query = NamedQueries::member().resolve(FIND_BY_NAMES, &params).unwrap();

        assert_eq!(query, MemberQuery::new().username_in(["memberA"]));
    }

    #[test]
    fn test_unknown_query() {
        let err = NamedQueries::member()
            .resolve("Member.nope", &QueryParams::new())
            .unwrap_err();
        assert_eq!(
            err,
            RepositoryError::UnknownNamedQuery {
                name: "Member.nope".to_string()
            }
        );
    }

    #[test]
    fn test_missing_parameter() {
        let params = QueryParams::new().with("username", "memberA");
        let err = NamedQueries::member().resolve(FIND_MEMBER, &params).unwrap_err();

        assert_eq!(
            err,
            RepositoryError::MissingParameter {
                query: FIND_MEMBER.to_string(),
                param: "age".to_string(),
            }
        );
    }

    #[test]
    fn test_invalid_parameter() {
        let negative_age = QueryParams::new().with("username", "memberA").with("age", -1i64);
        let err = NamedQueries::member().resolve(FIND_MEMBER, &negative_age).unwrap_err();
        assert!(
            matches!(err, RepositoryError::InvalidParameter { ref param, .. } if param == "age")
        );

        let int_username = QueryParams::new().with("username", 5i64);
        let err = NamedQueries::member().resolve(FIND_BY_USERNAME, &int_username).unwrap_err();
        assert!(matches!(err, RepositoryError::InvalidParameter { expected: "text", .. }));
    }
}
