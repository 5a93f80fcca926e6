//! # roster-core
//!
//! Core types, traits, and utilities for Roster RS.
//!
//! This crate provides the foundational building blocks used across all other crates:
//! - Common error types
//! - Result type aliases
//! - Core traits (Entity, Identifiable)
//! - Pagination types

pub mod error;
pub mod pagination;
pub mod traits;

pub use error::*;
pub use pagination::*;
pub use traits::*;
