//! Member search criteria
//!
//! The sparse input of the search operations. Every field is optional and an
//! unset field means "no constraint on this dimension". Blank strings count
//! as unset too, so a form submitting `username=` does not filter anything
//! out.

use serde::Deserialize;

use crate::filters::attributes as att;
use crate::filters::{Filter, FilterSet};

/// Optional search criteria for members
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MemberSearchCriteria {
    /// Exact username match
    pub username: Option<String>,
    /// Exact team name match (on the joined team)
    pub team_name: Option<String>,
    /// Inclusive lower age bound
    pub age_goe: Option<i32>,
    /// Inclusive upper age bound
    pub age_loe: Option<i32>,
}

impl MemberSearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn team_name(mut self, team_name: impl Into<String>) -> Self {
        self.team_name = Some(team_name.into());
        self
    }

    pub fn age_goe(mut self, age: i32) -> Self {
        self.age_goe = Some(age);
        self
    }

    pub fn age_loe(mut self, age: i32) -> Self {
        self.age_loe = Some(age);
        self
    }

    /// Build the conjunctive filter set for these criteria.
    ///
    /// Each set field yields one independent filter; unset (or blank) fields
    /// yield none, so absence can never exclude rows.
    pub fn to_filters(&self) -> FilterSet {
        let mut filters = FilterSet::new();

        if let Some(username) = non_blank(self.username.as_deref()) {
            filters.add(Filter::equals(att::USERNAME, username));
        }
        if let Some(team_name) = non_blank(self.team_name.as_deref()) {
            filters.add(Filter::equals(att::TEAM_NAME, team_name));
        }
        if let Some(age_goe) = self.age_goe {
            filters.add(Filter::gte(att::AGE, i64::from(age_goe)));
        }
        if let Some(age_loe) = self.age_loe {
            filters.add(Filter::lte(att::AGE, i64::from(age_loe)));
        }

        filters
    }

    /// True when no field constrains the search
    pub fn is_empty(&self) -> bool {
        self.to_filters().is_empty()
    }
}

/// Blank strings are treated as unset
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
