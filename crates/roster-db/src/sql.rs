//! SQL rendering for dynamic filters and sort orders
//!
//! Filters render to conditions over the member/team join (`members m LEFT
//! JOIN teams t`). Values are inlined as escaped literals; every rendered
//! condition is ANDed, and an empty filter set renders to no WHERE clause at
//! all, so an unset filter can never exclude rows.

use roster_queries::filters::{Filter, FilterOperator, FilterSet, FilterValue};
use roster_queries::sorts::{SortCriterion, SortDirection, SortOrder};

/// Map filter attribute names to joined columns
pub fn attribute_to_column(attribute: &str) -> Option<&'static str> {
    match attribute {
        "id" => Some("m.id"),
        "username" => Some("m.username"),
        "age" => Some("m.age"),
        "team_name" => Some("t.name"),
        _ => None,
    }
}

/// Convert a single filter to a SQL condition
pub fn filter_to_sql(filter: &Filter) -> Option<String> {
    let column = attribute_to_column(&filter.attribute)?;

    match (&filter.operator, &filter.value) {
        (FilterOperator::Equals, FilterValue::Str(s)) => {
            Some(format!("{} = '{}'", column, escape_string(s)))
        }
        (FilterOperator::Equals, FilterValue::Int(n)) => Some(format!("{} = {}", column, n)),
        (FilterOperator::GreaterThanOrEqual, FilterValue::Int(n)) => {
            Some(format!("{} >= {}", column, n))
        }
        (FilterOperator::LessThanOrEqual, FilterValue::Int(n)) => {
            Some(format!("{} <= {}", column, n))
        }
        (FilterOperator::Between, FilterValue::IntRange { from, to }) => {
            Some(format!("{} BETWEEN {} AND {}", column, from, to))
        }
        // Mismatched operator/value pairs render nothing rather than a
        // malformed condition.
        _ => None,
    }
}

/// Build a WHERE clause (including the keyword) from a filter set.
/// Empty sets produce an empty string.
pub fn build_where_clause(filters: &FilterSet) -> String {
    let conditions: Vec<String> = filters.filters().iter().filter_map(filter_to_sql).collect();

    if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    }
}

/// Build an ORDER BY clause from a sort order. No sort means no clause: the
/// unpaged search guarantees no ordering.
pub fn build_order_clause(sorts: &SortOrder) -> String {
    let parts: Vec<String> = sorts.criteria().iter().filter_map(sort_to_sql).collect();

    if parts.is_empty() {
        String::new()
    } else {
        format!("ORDER BY {}", parts.join(", "))
    }
}

/// Convert a sort criterion to SQL, with NULLS placement for the nullable
/// username column (named members come first either way).
fn sort_to_sql(criterion: &SortCriterion) -> Option<String> {
    let column = attribute_to_column(&criterion.attribute)?;
    let (direction, nulls) = match criterion.direction {
        SortDirection::Asc => ("ASC", "NULLS LAST"),
        SortDirection::Desc => ("DESC", "NULLS FIRST"),
    };
    Some(format!("{} {} {}", column, direction, nulls))
}

/// Escape string for SQL (prevent SQL injection)
pub fn escape_string(s: &str) -> String {
    s.replace('\'', "''")
}
