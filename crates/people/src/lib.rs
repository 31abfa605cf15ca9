//! People domain module.
//!
//! This crate contains the person record and its form rules, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod person;
pub mod validation;

pub use person::{NewPerson, Person, PersonForm};
pub use validation::validate;
