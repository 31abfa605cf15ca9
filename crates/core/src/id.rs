//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a person record.
///
/// Assigned by the store (`max + 1`), never reused while the record exists.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(u64);

impl PersonId {
    /// The id handed out by an empty store.
    pub const FIRST: PersonId = PersonId(1);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(&self) -> u64 {
        self.0
    }

    /// The id following this one.
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl core::fmt::Display for PersonId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for PersonId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<PersonId> for u64 {
    fn from(value: PersonId) -> Self {
        value.0
    }
}

impl FromStr for PersonId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .parse::<u64>()
            .map_err(|e| DomainError::invalid_id(format!("PersonId: {}: {}", s, e)))?;
        Ok(Self(value))
    }
}
