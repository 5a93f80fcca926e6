//! # roster-db
//!
//! Database layer for Roster RS, backed by PostgreSQL through SQLx.
//!
//! - Connection pool management (`pool`)
//! - SQL rendering for dynamic filters and sort orders (`sql`)
//! - Repositories for members and teams (`members`, `teams`)
//! - The dynamic query composer and its store seam (`search`)
//!
//! ## Example
//!
//! ```ignore
//! use roster_db::{Database, DatabaseConfig, MemberSearch, PgSearchBackend};
//! use roster_queries::MemberSearchCriteria;
//! use roster_core::PageRequest;
//!
//! let db = Database::connect(&DatabaseConfig::from_env()).await?;
//! let search = MemberSearch::new(PgSearchBackend::new(db.pool().clone()));
//!
//! let criteria = MemberSearchCriteria::new().team_name("teamB").age_goe(30);
//! let page = search
//!     .search_page_complex(&criteria, PageRequest::new(0, 20)?, None)
//!     .await?;
//! ```

pub mod members;
pub mod pool;
pub mod search;
pub mod sql;
pub mod teams;

// Re-exports
pub use members::{MemberRepository, MemberStats, TeamAgeAverage};
pub use pool::{Database, DatabaseConfig};
pub use search::{FetchWindow, MemberSearch, PgSearchBackend, SearchBackend};
pub use teams::TeamRepository;

use roster_core::RosterError;

/// Map a store-level failure to the core taxonomy. The composer never
/// retries; connectivity and timeout failures surface to the caller as-is.
pub(crate) fn store_err(err: sqlx::Error) -> RosterError {
    RosterError::StoreUnavailable(err.to_string())
}
