//! Sort orders
//!
//! Sort criteria are applied in sequence: the first criterion is primary,
//! later ones break ties.

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Some(Self::Asc),
            "desc" | "descending" => Some(Self::Desc),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// A single sort criterion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortCriterion {
    /// The attribute to sort by (see `filters::attributes`)
    pub attribute: String,
    pub direction: SortDirection,
}

impl SortCriterion {
    pub fn new(attribute: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            attribute: attribute.into(),
            direction,
        }
    }

    pub fn asc(attribute: impl Into<String>) -> Self {
        Self::new(attribute, SortDirection::Asc)
    }

    pub fn desc(attribute: impl Into<String>) -> Self {
        Self::new(attribute, SortDirection::Desc)
    }
}

/// An ordered list of sort criteria
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortOrder {
    criteria: Vec<SortCriterion>,
}

impl SortOrder {
    pub fn new() -> Self {
        Self { criteria: vec![] }
    }

    pub fn by_asc(attribute: impl Into<String>) -> Self {
        Self {
            criteria: vec![SortCriterion::asc(attribute)],
        }
    }

    pub fn by_desc(attribute: impl Into<String>) -> Self {
        Self {
            criteria: vec![SortCriterion::desc(attribute)],
        }
    }

    /// Add a tie-breaking criterion (builder pattern)
    pub fn then_asc(mut self, attribute: impl Into<String>) -> Self {
        self.criteria.push(SortCriterion::asc(attribute));
        self
    }

    /// Add a tie-breaking criterion (builder pattern)
    pub fn then_desc(mut self, attribute: impl Into<String>) -> Self {
        self.criteria.push(SortCriterion::desc(attribute));
        self
    }

    pub fn criteria(&self) -> &[SortCriterion] {
        &self.criteria
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }
}

/// The default ordering of paged member searches: ascending by id with a
/// descending username tie-break.
pub fn default_member_sort() -> SortOrder {
    SortOrder::by_asc(crate::filters::attributes::ID)
        .then_desc(crate::filters::attributes::USERNAME)
}
