//! # roster-queries
//!
//! The dynamic search layer for Roster RS: filter conditions, the sparse
//! search criteria callers fill in, and sort orders.
//!
//! ## Structure
//!
//! - `filters` - Filter conditions combined with AND semantics
//! - `criteria` - `MemberSearchCriteria`, the sparse search input
//! - `sorts` - Sort criteria and the default member ordering
//!
//! ## Example
//!
//! ```
//! use roster_queries::criteria::MemberSearchCriteria;
//!
//! let criteria = MemberSearchCriteria::new()
//!     .team_name("teamB")
//!     .age_goe(30)
//!     .age_loe(40);
//!
//! // Only the three set fields become filters; unset fields constrain nothing.
//! assert_eq!(criteria.to_filters().len(), 3);
//! ```

pub mod criteria;
pub mod filters;
pub mod sorts;

// Re-exports for convenience
pub use criteria::MemberSearchCriteria;
pub use filters::{attributes, Filter, FilterOperator, FilterSet, FilterValue};
pub use sorts::{default_member_sort, SortCriterion, SortDirection, SortOrder};
