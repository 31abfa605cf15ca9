//! Record access layer: the async boundary between views and the store.
//!
//! Five operations, each modelled as a remote call. `get` reports a missing
//! record as `None`; `update` and `delete` report it as
//! [`AccessError::NotFound`].

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use roster_core::{DomainError, PersonId};
use roster_people::{NewPerson, Person};

pub mod latency;
pub mod simulated;

pub use latency::Latency;
pub use simulated::SimulatedPeopleApi;

pub type AccessResult<T> = Result<T, AccessError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessError {
    #[error("person {0} not found")]
    NotFound(PersonId),

    #[error("domain error: {0}")]
    Domain(DomainError),

    /// The backend could not serve the request at all.
    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

impl From<DomainError> for AccessError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound(id) => AccessError::NotFound(id),
            other => AccessError::Domain(other),
        }
    }
}

impl AccessError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, AccessError::NotFound(_))
    }
}

/// Person CRUD contract any backend must satisfy.
#[async_trait]
pub trait PeopleApi: Send + Sync {
    /// All records, in insertion order.
    async fn list(&self) -> AccessResult<Vec<Person>>;

    /// The record with `id`, or `None`.
    async fn get(&self, id: PersonId) -> AccessResult<Option<Person>>;

    /// Store a new record under the next free id.
    async fn create(&self, data: NewPerson) -> AccessResult<Person>;

    /// Replace the record with `person.id`.
    async fn update(&self, person: Person) -> AccessResult<Person>;

    /// Remove the record with `id`.
    async fn delete(&self, id: PersonId) -> AccessResult<()>;
}

#[async_trait]
impl<S> PeopleApi for Arc<S>
where
    S: PeopleApi + ?Sized,
{
    async fn list(&self) -> AccessResult<Vec<Person>> {
        (**self).list().await
    }

    async fn get(&self, id: PersonId) -> AccessResult<Option<Person>> {
        (**self).get(id).await
    }

    async fn create(&self, data: NewPerson) -> AccessResult<Person> {
        (**self).create(data).await
    }

    async fn update(&self, person: Person) -> AccessResult<Person> {
        (**self).update(person).await
    }

    async fn delete(&self, id: PersonId) -> AccessResult<()> {
        (**self).delete(id).await
    }
}
