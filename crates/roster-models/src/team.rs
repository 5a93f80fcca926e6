//! Team model
//!
//! Table: teams
//!
//! A team does not carry its member list; the membership side lives entirely
//! on `Member::team_id` and the collection is computed by
//! `TeamRepository::members_of`. Keeping a single source of truth avoids the
//! two-sided bookkeeping a stored back-collection would need.

use roster_core::traits::{Entity, Id, Identifiable};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Team entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Team {
    pub id: Option<Id>,
    pub name: String,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}

impl Identifiable for Team {
    fn id(&self) -> Option<Id> {
        self.id
    }
}

impl Entity for Team {
    const TABLE_NAME: &'static str = "teams";
    const TYPE_NAME: &'static str = "Team";
}
