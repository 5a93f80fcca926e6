//! Member model
//!
//! Table: members

use roster_core::traits::{Entity, Id, Identifiable};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Member entity
///
/// A member optionally belongs to one team via `team_id`. The username is
/// nullable: the directory accepts members that have not picked a name yet,
/// and sorts place them after named members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Member {
    pub id: Option<Id>,
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<Id>,
}

impl Member {
    /// Create a member assigned to a team
    pub fn new(username: impl Into<String>, age: i32, team_id: Id) -> Self {
        Self {
            id: None,
            username: Some(username.into()),
            age,
            team_id: Some(team_id),
        }
    }

    /// Create a member without a team
    pub fn unassigned(username: impl Into<String>, age: i32) -> Self {
        Self {
            id: None,
            username: Some(username.into()),
            age,
            team_id: None,
        }
    }

    /// Create a member that has no username yet
    pub fn anonymous(age: i32) -> Self {
        Self {
            id: None,
            username: None,
            age,
            team_id: None,
        }
    }

    /// Move the member to another team
    pub fn change_team(&mut self, team_id: Id) {
        self.team_id = Some(team_id);
    }
}

impl Identifiable for Member {
    fn id(&self) -> Option<Id> {
        self.id
    }
}

impl Entity for Member {
    const TABLE_NAME: &'static str = "members";
    const TYPE_NAME: &'static str = "Member";
}
