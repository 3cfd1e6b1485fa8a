//! Ordered query arguments
//!
//! Every query object flattens itself into a [`QueryArgs`] list. The order of
//! the list is the order of the parameters on the wire.

use serde::{Deserialize, Serialize};

/// A single name/value pair sent as a URL query parameter or form field
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryArg {
    pub name: String,
    pub value: String,
}

impl QueryArg {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Ordered list of query arguments.
///
/// Equality compares position by position, so two lists holding the same
/// arguments in a different order are not equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryArgs(Vec<QueryArg>);

impl QueryArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, arg: QueryArg) -> &mut Self {
        self.0.push(arg);
        self
    }

    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.push(QueryArg::new(name, value))
    }

    /// Append every argument of `other`, keeping its order.
    pub fn merge(&mut self, other: QueryArgs) -> &mut Self {
        self.0.extend(other.0);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QueryArg> {
        self.0.iter()
    }

    /// Value of the first argument called `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|arg| arg.name == name)
            .map(|arg| arg.value.as_str())
    }

    pub fn equal_to(&self, other: &QueryArgs) -> bool {
        self == other
    }

    pub fn as_pairs(&self) -> Vec<(&str, &str)> {
        self.0
            .iter()
            .map(|arg| (arg.name.as_str(), arg.value.as_str()))
            .collect()
    }
}

impl From<Vec<QueryArg>> for QueryArgs {
    fn from(args: Vec<QueryArg>) -> Self {
        Self(args)
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for QueryArgs {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| QueryArg::new(name, value))
                .collect(),
        )
    }
}

impl IntoIterator for QueryArgs {
    type Item = QueryArg;
    type IntoIter = std::vec::IntoIter<QueryArg>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a QueryArgs {
    type Item = &'a QueryArg;
    type IntoIter = std::slice::Iter<'a, QueryArg>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(pairs: &[(&str, &str)]) -> QueryArgs {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_equal_query_args() {
        let a = args(&[("field1", "value1")]);
        let b = args(&[("field1", "value1")]);
        assert!(a.equal_to(&b));
    }

    #[test]
    fn test_different_lengths_are_not_equal() {
        let a = args(&[("field1", "value1")]);
        let b = args(&[("field1", "value1"), ("field2", "value2")]);
        assert!(!a.equal_to(&b));
        assert!(!b.equal_to(&a));
    }

    #[test]
    fn test_different_names_are_not_equal() {
        let a = args(&[("field1", "value1")]);
        let b = args(&[("otherfield", "value1")]);
        assert!(!a.equal_to(&b));
    }

    #[test]
    fn test_different_values_are_not_equal() {
        let a = args(&[("field1", "value1")]);
        let b = args(&[("field1", "othervalue")]);
        assert!(!a.equal_to(&b));
    }

    #[test]
    fn test_order_matters_for_equality() {
        let a = args(&[("a", "1"), ("b", "2")]);
        let b = args(&[("b", "2"), ("a", "1")]);
        assert!(!a.equal_to(&b));
    }

    #[test]
    fn test_merge_appends_in_order() {
        let mut merged = args(&[("period", "day")]);
        merged
            .merge(args(&[("metrics", "visitors")]))
            .add("compare", "previous_period");

        assert_eq!(
            merged.as_pairs(),
            vec![
                ("period", "day"),
                ("metrics", "visitors"),
                ("compare", "previous_period")
            ]
        );
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn test_get_returns_first_match() {
        let a = args(&[("x", "1"), ("x", "2")]);
        assert_eq!(a.get("x"), Some("1"));
        assert_eq!(a.get("y"), None);
    }
}
