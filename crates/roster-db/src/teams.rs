//! Teams repository
//!
//! A team's member list is not stored anywhere; `members_of` derives it from
//! `members.team_id` on demand.

use sqlx::PgPool;

use crate::store_err;
use roster_core::{Id, RosterError, RosterResult};
use roster_models::{Member, Team};

/// Team repository
pub struct TeamRepository {
    pool: PgPool,
}

impl TeamRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a team and return the store-assigned id
    pub async fn insert(&self, team: &Team) -> RosterResult<Id> {
        sqlx::query_scalar("INSERT INTO teams (name) VALUES ($1) RETURNING id")
            .bind(&team.name)
            .fetch_one(&self.pool)
            .await
            .map_err(store_err)
    }

    pub async fn find_by_id(&self, id: Id) -> RosterResult<Option<Team>> {
        sqlx::query_as::<_, Team>("SELECT id, name FROM teams WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(store_err)
    }

    /// Like `find_by_id`, but a missing team is an error
    pub async fn get(&self, id: Id) -> RosterResult<Team> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RosterError::not_found("Team", id))
    }

    /// The members currently assigned to a team. A team with no members
    /// yields an empty list, never an error.
    pub async fn members_of(&self, team_id: Id) -> RosterResult<Vec<Member>> {
        sqlx::query_as::<_, Member>(
            "SELECT id, username, age, team_id FROM members WHERE team_id = $1 ORDER BY id",
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await
        .map_err(store_err)
    }
}
