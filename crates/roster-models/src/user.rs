//! User model
//!
//! Table: users
//!
//! Accounts are a stub in this system: a user is an identity that a member
//! can later be linked to. Nothing in the search layer touches it.

use roster_core::traits::{Entity, Id, Identifiable};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Option<Id>,
}

impl User {
    pub fn new() -> Self {
        Self { id: None }
    }
}

impl Default for User {
    fn default() -> Self {
        Self::new()
    }
}

impl Identifiable for User {
    fn id(&self) -> Option<Id> {
        self.id
    }
}

impl Entity for User {
    const TABLE_NAME: &'static str = "users";
    const TYPE_NAME: &'static str = "User";
}
