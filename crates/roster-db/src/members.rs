//! Members repository
//!
//! CRUD plus the dynamic and aggregate reads over the members table.

use sqlx::{FromRow, PgPool};

use crate::sql::build_where_clause;
use crate::store_err;
use roster_core::{Id, RosterError, RosterResult};
use roster_models::Member;
use roster_queries::filters::FilterSet;

/// Aggregate statistics over member ages
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct MemberStats {
    pub member_count: i64,
    pub age_sum: Option<i64>,
    pub age_avg: Option<f64>,
    pub age_max: Option<i32>,
    pub age_min: Option<i32>,
}

/// Average member age per team, one row per team name.
/// Teamless members aggregate under a null team name.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct TeamAgeAverage {
    pub team_name: Option<String>,
    pub average_age: Option<f64>,
}

/// Member repository
pub struct MemberRepository {
    pool: PgPool,
}

impl MemberRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a member and return the store-assigned id
    pub async fn insert(&self, member: &Member) -> RosterResult<Id> {
        let id: Id = sqlx::query_scalar(
            "INSERT INTO members (username, age, team_id) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(member.username.as_deref())
        .bind(member.age)
        .bind(member.team_id)
        .fetch_one(&self.pool)
        .await
        .map_err(store_err)?;

        tracing::debug!(id, "member inserted");
        Ok(id)
    }

    pub async fn find_by_id(&self, id: Id) -> RosterResult<Option<Member>> {
        sqlx::query_as::<_, Member>(
            "SELECT id, username, age, team_id FROM members WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_err)
    }

    /// Like `find_by_id`, but a missing member is an error
    pub async fn get(&self, id: Id) -> RosterResult<Member> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RosterError::not_found("Member", id))
    }

    pub async fn find_all(&self) -> RosterResult<Vec<Member>> {
        sqlx::query_as::<_, Member>("SELECT id, username, age, team_id FROM members")
            .fetch_all(&self.pool)
            .await
            .map_err(store_err)
    }

    pub async fn find_by_username(&self, username: &str) -> RosterResult<Vec<Member>> {
        sqlx::query_as::<_, Member>(
            "SELECT id, username, age, team_id FROM members WHERE username = $1",
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await
        .map_err(store_err)
    }

    /// Find members matching an arbitrary filter set. Filters on `team_name`
    /// apply through the left join; everything else hits member columns.
    pub async fn find_matching(&self, filters: &FilterSet) -> RosterResult<Vec<Member>> {
        let sql = format!(
            "SELECT m.id, m.username, m.age, m.team_id \
             FROM members m LEFT JOIN teams t ON m.team_id = t.id {}",
            build_where_clause(filters)
        );

        sqlx::query_as::<_, Member>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(store_err)
    }

    /// Count, sum, average, max, and min over member ages
    pub async fn stats(&self) -> RosterResult<MemberStats> {
        sqlx::query_as::<_, MemberStats>(
            "SELECT COUNT(*) AS member_count, \
                    SUM(age)::int8 AS age_sum, \
                    AVG(age)::float8 AS age_avg, \
                    MAX(age) AS age_max, \
                    MIN(age) AS age_min \
             FROM members",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(store_err)
    }

    /// Average age per team name, via the member/team left join
    pub async fn average_age_by_team(&self) -> RosterResult<Vec<TeamAgeAverage>> {
        sqlx::query_as::<_, TeamAgeAverage>(
            "SELECT t.name AS team_name, AVG(m.age)::float8 AS average_age \
             FROM members m LEFT JOIN teams t ON m.team_id = t.id \
             GROUP BY t.name \
             ORDER BY t.name NULLS LAST",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(store_err)
    }
}
