//! Read-only projections produced by the search layer

use roster_core::traits::Id;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Member joined to its team, as returned by the search operations.
///
/// Comes from a left join, so `team_id` and `team_name` are null for
/// members without a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct MemberWithTeam {
    pub member_id: Id,
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<Id>,
    pub team_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_null_team() {
        let row = MemberWithTeam {
            member_id: 1,
            username: Some("member1".to_string()),
            age: 10,
            team_id: None,
            team_name: None,
        };

        let json = serde_json::to_value(&row).unwrap();
        assert!(json["team_id"].is_null());
        assert!(json["team_name"].is_null());
        assert_eq!(json["age"], 10);
    }
}
