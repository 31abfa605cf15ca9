use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use async_trait::async_trait;

use roster_core::PersonId;
use roster_people::{NewPerson, Person};

use super::{AccessError, AccessResult, Latency, PeopleApi};
use crate::store::PersonStore;

/// Access layer over an in-process [`PersonStore`] that waits before each
/// operation, standing in for a network round trip.
///
/// The lock is taken only after the delay and never held across an await.
/// Concurrent writers race last-write-wins.
#[derive(Debug)]
pub struct SimulatedPeopleApi {
    store: RwLock<PersonStore>,
    latency: Latency,
}

impl SimulatedPeopleApi {
    pub fn new(store: PersonStore, latency: Latency) -> Self {
        Self {
            store: RwLock::new(store),
            latency,
        }
    }

    pub fn latency(&self) -> Latency {
        self.latency
    }

    /// Copy of the current store contents.
    pub fn snapshot(&self) -> AccessResult<PersonStore> {
        Ok(self.read()?.clone())
    }

    fn read(&self) -> AccessResult<RwLockReadGuard<'_, PersonStore>> {
        self.store
            .read()
            .map_err(|_| AccessError::Unavailable("store lock poisoned".to_string()))
    }

    fn write(&self) -> AccessResult<RwLockWriteGuard<'_, PersonStore>> {
        self.store
            .write()
            .map_err(|_| AccessError::Unavailable("store lock poisoned".to_string()))
    }
}

async fn simulate(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[async_trait]
impl PeopleApi for SimulatedPeopleApi {
    async fn list(&self) -> AccessResult<Vec<Person>> {
        simulate(self.latency.list).await;
        let people = self.read()?.list().to_vec();
        tracing::debug!(count = people.len(), "listed people");
        Ok(people)
    }

    async fn get(&self, id: PersonId) -> AccessResult<Option<Person>> {
        simulate(self.latency.get).await;
        let person = self.read()?.get(id).cloned();
        tracing::debug!(%id, found = person.is_some(), "fetched person");
        Ok(person)
    }

    async fn create(&self, data: NewPerson) -> AccessResult<Person> {
        simulate(self.latency.create).await;
        let person = self.write()?.insert(data);
        tracing::info!(id = %person.id, "created person");
        Ok(person)
    }

    async fn update(&self, person: Person) -> AccessResult<Person> {
        simulate(self.latency.update).await;
        let id = person.id;
        let result = self.write()?.update(person);
        match result {
            Ok(updated) => {
                tracing::info!(%id, "updated person");
                Ok(updated)
            }
            Err(e) => {
                tracing::warn!(%id, "update of missing person");
                Err(e.into())
            }
        }
    }

    async fn delete(&self, id: PersonId) -> AccessResult<()> {
        simulate(self.latency.delete).await;
        let result = self.write()?.delete(id);
        match result {
            Ok(_) => {
                tracing::info!(%id, "deleted person");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(%id, "delete of missing person");
                Err(e.into())
            }
        }
    }
}
