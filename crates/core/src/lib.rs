//! `roster-core`: shared primitives for the people domain.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod field;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use field::{Field, FieldErrors};
pub use id::PersonId;
