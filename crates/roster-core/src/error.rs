//! Core error types for Roster RS
//!
//! The taxonomy is deliberately small: bad caller input, a missing record on a
//! single-record lookup, and an unreachable store. List operations never fail
//! with `NotFound`; they return empty collections instead.

use thiserror::Error;

use crate::traits::Id;

/// Core error type for all Roster operations
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not found: {entity} with id={id}")]
    NotFound { entity: &'static str, id: Id },

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

impl RosterError {
    /// Build an `InvalidArgument` error from any displayable message
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Build a `NotFound` error for a single-record lookup
    pub fn not_found(entity: &'static str, id: Id) -> Self {
        Self::NotFound { entity, id }
    }
}

/// Standard Result type for Roster operations
pub type RosterResult<T> = Result<T, RosterError>;
