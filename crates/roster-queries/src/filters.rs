//! Search filters
//!
//! A `Filter` is one boolean condition on a member or team attribute; a
//! `FilterSet` combines filters conjunctively. An attribute that no filter
//! mentions is unconstrained, so an empty set matches every row.

use roster_core::traits::Id;

/// Operators a filter can apply to its value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    /// Equality (=)
    Equals,
    /// Inclusive lower bound (>=)
    GreaterThanOrEqual,
    /// Inclusive upper bound (<=)
    LessThanOrEqual,
    /// Inclusive range
    Between,
}

/// Filter value types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    /// Integer value (ages, ids)
    Int(i64),
    /// String value (usernames, team names)
    Str(String),
    /// Inclusive integer range, for `Between`
    IntRange { from: i64, to: i64 },
}

impl FilterValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

/// Known filter and sort attributes
pub mod attributes {
    pub const ID: &str = "id";
    pub const USERNAME: &str = "username";
    pub const AGE: &str = "age";
    pub const TEAM_NAME: &str = "team_name";
}

/// A single filter condition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    /// The attribute being filtered (see [`attributes`])
    pub attribute: String,
    pub operator: FilterOperator,
    pub value: FilterValue,
}

impl Filter {
    pub fn new(attribute: impl Into<String>, operator: FilterOperator, value: FilterValue) -> Self {
        Self {
            attribute: attribute.into(),
            operator,
            value,
        }
    }

    /// Equality on a string attribute
    pub fn equals(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(attribute, FilterOperator::Equals, FilterValue::Str(value.into()))
    }

    /// Equality on an integer attribute
    pub fn equals_int(attribute: impl Into<String>, value: i64) -> Self {
        Self::new(attribute, FilterOperator::Equals, FilterValue::Int(value))
    }

    /// Inclusive lower bound on an integer attribute
    pub fn gte(attribute: impl Into<String>, value: i64) -> Self {
        Self::new(
            attribute,
            FilterOperator::GreaterThanOrEqual,
            FilterValue::Int(value),
        )
    }

    /// Inclusive upper bound on an integer attribute
    pub fn lte(attribute: impl Into<String>, value: i64) -> Self {
        Self::new(
            attribute,
            FilterOperator::LessThanOrEqual,
            FilterValue::Int(value),
        )
    }

    /// Inclusive range on an integer attribute
    pub fn between(attribute: impl Into<String>, from: i64, to: i64) -> Self {
        Self::new(
            attribute,
            FilterOperator::Between,
            FilterValue::IntRange { from, to },
        )
    }

    /// Equality on an id attribute
    pub fn id_equals(attribute: impl Into<String>, id: Id) -> Self {
        Self::equals_int(attribute, id)
    }
}

/// A collection of filters with AND semantics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    filters: Vec<Filter>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self { filters: vec![] }
    }

    pub fn add(&mut self, filter: Filter) -> &mut Self {
        self.filters.push(filter);
        self
    }

    /// Add a filter and return self (builder pattern)
    pub fn with(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn has_filter_for(&self, attribute: &str) -> bool {
        self.filters.iter().any(|f| f.attribute == attribute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_constructors() {
        let filter = Filter::equals(attributes::USERNAME, "member1");
        assert_eq!(filter.attribute, "username");
        assert_eq!(filter.operator, FilterOperator::Equals);
        assert_eq!(filter.value.as_str(), Some("member1"));

        let filter = Filter::gte(attributes::AGE, 30);
        assert_eq!(filter.operator, FilterOperator::GreaterThanOrEqual);
        assert_eq!(filter.value.as_int(), Some(30));
    }

    #[test]
    fn test_between_filter() {
        let filter = Filter::between(attributes::AGE, 20, 40);
        assert_eq!(
            filter.value,
            FilterValue::IntRange { from: 20, to: 40 }
        );
    }

    #[test]
    fn test_filter_set() {
        let filters = FilterSet::new()
            .with(Filter::equals(attributes::TEAM_NAME, "teamB"))
            .with(Filter::gte(attributes::AGE, 30));

        assert_eq!(filters.len(), 2);
        assert!(filters.has_filter_for("team_name"));
        assert!(filters.has_filter_for("age"));
        assert!(!filters.has_filter_for("username"));
    }

    #[test]
    fn test_empty_set_constrains_nothing() {
        let filters = FilterSet::new();
        assert!(filters.is_empty());
        assert!(filters.filters().is_empty());
    }
}
