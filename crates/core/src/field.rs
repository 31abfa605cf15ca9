//! Form fields of a person record and the per-field error collection.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

/// A user-editable field of a person record.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Address,
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Field; 5] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Phone,
        Field::Address,
    ];

    /// Fields that carry a validation rule (a submit attempt touches these).
    pub const VALIDATED: [Field; 4] =
        [Field::FirstName, Field::LastName, Field::Email, Field::Phone];

    /// Wire / form-control name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Address => "address",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::Address => "Address",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, Field::FirstName | Field::LastName | Field::Email)
    }
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation failures keyed by field, one message per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    inner: BTreeMap<Field, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for `field`, replacing any earlier message.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.inner.insert(field, message.into());
    }

    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.inner.remove(&field)
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.inner.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.inner.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.inner.iter().map(|(f, m)| (*f, m.as_str()))
    }

    /// `Ok(())` when nothing failed, otherwise the collected errors.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl core::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter().map(|(f, m)| (f.as_str(), m)))
    }
}
