//! # roster-models
//!
//! Domain models for Roster RS.
//!
//! This crate contains the entity structs that map to the directory tables
//! (`members`, `teams`, `users`) plus the read-only projection returned by
//! the search layer. Each model implements the core traits from
//! `roster-core` (Entity, Identifiable).

pub use roster_core::traits::{Entity, Id, Identifiable};

pub mod member;
pub mod projection;
pub mod team;
pub mod user;

// Re-exports for convenience
pub use member::Member;
pub use projection::MemberWithTeam;
pub use team::Team;
pub use user::User;
