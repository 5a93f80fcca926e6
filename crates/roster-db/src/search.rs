//! Member search
//!
//! `MemberSearch` turns sparse `MemberSearchCriteria` into the member/team
//! left-join query and exposes the three read operations: an unpaged list, a
//! simple page with an unconditional count query, and an optimized page that
//! skips the count query whenever the fetched window already determines the
//! total.
//!
//! The store is reached through the `SearchBackend` seam so the composer
//! itself stays free of SQL.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use sqlx::PgPool;

use crate::sql::{build_order_clause, build_where_clause};
use crate::store_err;
use roster_core::{Page, PageRequest, RosterResult};
use roster_models::MemberWithTeam;
use roster_queries::criteria::MemberSearchCriteria;
use roster_queries::filters::FilterSet;
use roster_queries::sorts::{default_member_sort, SortOrder};

/// An offset/limit window over the joined result set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchWindow {
    pub offset: i64,
    pub limit: i64,
}

impl From<PageRequest> for FetchWindow {
    fn from(page: PageRequest) -> Self {
        Self {
            offset: page.offset(),
            limit: page.page_size(),
        }
    }
}

/// The relational store as the composer sees it: one join-capable row query
/// and one count query over the same filter set.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Fetch projections for the member/team left join, optionally windowed.
    /// An empty sort means no ordering guarantee.
    async fn fetch(
        &self,
        filters: &FilterSet,
        sort: &SortOrder,
        window: Option<FetchWindow>,
    ) -> RosterResult<Vec<MemberWithTeam>>;

    /// Count rows matching the filter set (no ordering, no window)
    async fn count(&self, filters: &FilterSet) -> RosterResult<i64>;
}

/// PostgreSQL-backed search backend
pub struct PgSearchBackend {
    pool: PgPool,
}

impl PgSearchBackend {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SEARCH_FROM: &str = "FROM members m LEFT JOIN teams t ON m.team_id = t.id";

#[async_trait]
impl SearchBackend for PgSearchBackend {
    async fn fetch(
        &self,
        filters: &FilterSet,
        sort: &SortOrder,
        window: Option<FetchWindow>,
    ) -> RosterResult<Vec<MemberWithTeam>> {
        let mut sql = format!(
            "SELECT m.id AS member_id, m.username, m.age, t.id AS team_id, t.name AS team_name \
             {} {} {}",
            SEARCH_FROM,
            build_where_clause(filters),
            build_order_clause(sort),
        );
        if let Some(window) = window {
            sql.push_str(&format!(" LIMIT {} OFFSET {}", window.limit, window.offset));
        }

        tracing::debug!(%sql, "executing member search");
        sqlx::query_as::<_, MemberWithTeam>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(store_err)
    }

    async fn count(&self, filters: &FilterSet) -> RosterResult<i64> {
        let sql = format!(
            "SELECT COUNT(*) {} {}",
            SEARCH_FROM,
            build_where_clause(filters)
        );

        tracing::debug!(%sql, "executing member count");
        sqlx::query_scalar(&sql)
            .fetch_one(&self.pool)
            .await
            .map_err(store_err)
    }
}

/// Dynamic query composer over a search backend
pub struct MemberSearch<B: SearchBackend> {
    backend: B,
}

impl<B: SearchBackend> MemberSearch<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Unpaged search. No ordering guarantee.
    pub async fn search(
        &self,
        criteria: &MemberSearchCriteria,
    ) -> RosterResult<Vec<MemberWithTeam>> {
        self.backend
            .fetch(&criteria.to_filters(), &SortOrder::new(), None)
            .await
    }

    /// Paged search that always issues the count query, so `total_elements`
    /// is exact regardless of the fetched window.
    pub async fn search_page_simple(
        &self,
        criteria: &MemberSearchCriteria,
        page: PageRequest,
    ) -> RosterResult<Page<MemberWithTeam>> {
        let filters = criteria.to_filters();
        let content = self
            .backend
            .fetch(&filters, &default_member_sort(), Some(page.into()))
            .await?;
        let total = self.backend.count(&filters).await?;

        Ok(Page::new(content, total, page))
    }

    /// Paged search that elides the count query when the fetched window
    /// already determines the total. Sorts by `sort` when given, otherwise
    /// by the default member ordering.
    pub async fn search_page_complex(
        &self,
        criteria: &MemberSearchCriteria,
        page: PageRequest,
        sort: Option<SortOrder>,
    ) -> RosterResult<Page<MemberWithTeam>> {
        let filters = criteria.to_filters();
        let sort = sort.unwrap_or_else(default_member_sort);
        let content = self
            .backend
            .fetch(&filters, &sort, Some(page.into()))
            .await?;

        let total = match short_circuit_total(page.offset(), page.page_size(), content.len()) {
            Some(total) => {
                tracing::debug!(total, "count query skipped, window determines total");
                total
            }
            None => self.backend.count(&filters).await?,
        };

        Ok(Page::new(content, total, page))
    }
}

/// The total element count derivable from the fetched window alone, if any.
///
/// A short window on the first page is the whole result set. A short,
/// non-empty window on a later page ends the result set at
/// `offset + fetched`. An empty later page proves nothing (the offset may be
/// far past the end) and a full window may or may not be the last page, so
/// both fall back to the count query.
fn short_circuit_total(offset: i64, page_size: i64, fetched: usize) -> Option<i64> {
    let fetched = fetched as i64;
    if fetched >= page_size {
        return None;
    }
    if offset == 0 {
        Some(fetched)
    } else if fetched > 0 {
        Some(offset + fetched)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::RosterError;

    fn row(member_id: i64, username: &str, age: i32) -> MemberWithTeam {
        MemberWithTeam {
            member_id,
            username: Some(username.to_string()),
            age,
            team_id: None,
            team_name: None,
        }
    }

    #[test]
    fn test_short_circuit_first_page_short_window() {
        assert_eq!(short_circuit_total(0, 10, 4), Some(4));
        assert_eq!(short_circuit_total(0, 10, 0), Some(0));
    }

    #[test]
    fn test_short_circuit_later_page_short_window() {
        // offset 3, one row fetched into a window of 3: total is 4
        assert_eq!(short_circuit_total(3, 3, 1), Some(4));
    }

    #[test]
    fn test_no_short_circuit_on_full_window() {
        assert_eq!(short_circuit_total(0, 4, 4), None);
        assert_eq!(short_circuit_total(4, 4, 4), None);
    }

    #[test]
    fn test_no_short_circuit_on_empty_later_page() {
        // offset past the end proves nothing about the true total
        assert_eq!(short_circuit_total(30, 10, 0), None);
    }

    #[tokio::test]
    async fn test_complex_page_skips_count_when_window_is_short() {
        let mut backend = MockSearchBackend::new();
        backend
            .expect_fetch()
            .returning(|_, _, _| Ok(vec![row(1, "member1", 10), row(2, "member2", 20)]));
        backend.expect_count().never();

        let search = MemberSearch::new(backend);
        let page = search
            .search_page_complex(
                &MemberSearchCriteria::new(),
                PageRequest::new(0, 10).unwrap(),
                None,
            )
            .await
            .unwrap();

        assert_eq!(page.total_elements, 2);
        assert_eq!(page.content.len(), 2);
    }

    #[tokio::test]
    async fn test_complex_page_counts_when_window_is_full() {
        let mut backend = MockSearchBackend::new();
        backend
            .expect_fetch()
            .returning(|_, _, _| Ok(vec![row(1, "member1", 10), row(2, "member2", 20)]));
        backend.expect_count().times(1).returning(|_| Ok(7));

        let search = MemberSearch::new(backend);
        let page = search
            .search_page_complex(
                &MemberSearchCriteria::new(),
                PageRequest::new(0, 2).unwrap(),
                None,
            )
            .await
            .unwrap();

        assert_eq!(page.total_elements, 7);
    }

    #[tokio::test]
    async fn test_simple_page_always_counts() {
        let mut backend = MockSearchBackend::new();
        backend
            .expect_fetch()
            .returning(|_, _, _| Ok(vec![row(1, "member1", 10)]));
        backend.expect_count().times(1).returning(|_| Ok(1));

        let search = MemberSearch::new(backend);
        let page = search
            .search_page_simple(&MemberSearchCriteria::new(), PageRequest::new(0, 10).unwrap())
            .await
            .unwrap();

        assert_eq!(page.total_elements, 1);
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let mut backend = MockSearchBackend::new();
        backend
            .expect_fetch()
            .returning(|_, _, _| Err(RosterError::StoreUnavailable("connection refused".into())));

        let search = MemberSearch::new(backend);
        let result = search.search(&MemberSearchCriteria::new()).await;

        assert!(matches!(result, Err(RosterError::StoreUnavailable(_))));
    }
}
