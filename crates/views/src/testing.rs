//! Access-layer double for view tests: records calls, can fail on demand.

use std::sync::Mutex;

use async_trait::async_trait;

use roster_core::PersonId;
use roster_infra::{AccessError, AccessResult, Latency, PeopleApi, PersonStore, SimulatedPeopleApi};
use roster_people::{NewPerson, Person};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fail {
    List,
    Get,
    Create,
    Update,
}

pub struct RecordingApi {
    inner: SimulatedPeopleApi,
    calls: Mutex<Vec<&'static str>>,
    fail: Option<Fail>,
}

impl RecordingApi {
    pub fn seeded() -> Self {
        Self::with_store(PersonStore::seeded())
    }

    pub fn empty() -> Self {
        Self::with_store(PersonStore::new())
    }

    fn with_store(store: PersonStore) -> Self {
        Self {
            inner: SimulatedPeopleApi::new(store, Latency::none()),
            calls: Mutex::new(Vec::new()),
            fail: None,
        }
    }

    pub fn failing(mut self, fail: Fail) -> Self {
        self.fail = Some(fail);
        self
    }

    /// The wrapped store, bypassing call recording.
    pub fn inner(&self) -> &SimulatedPeopleApi {
        &self.inner
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str, fail: Fail) -> AccessResult<()> {
        self.calls.lock().unwrap().push(call);
        if self.fail == Some(fail) {
            Err(AccessError::Unavailable("injected failure".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl PeopleApi for RecordingApi {
    async fn list(&self) -> AccessResult<Vec<Person>> {
        self.record("list", Fail::List)?;
        self.inner.list().await
    }

    async fn get(&self, id: PersonId) -> AccessResult<Option<Person>> {
        self.record("get", Fail::Get)?;
        self.inner.get(id).await
    }

    async fn create(&self, data: NewPerson) -> AccessResult<Person> {
        self.record("create", Fail::Create)?;
        self.inner.create(data).await
    }

    async fn update(&self, person: Person) -> AccessResult<Person> {
        self.record("update", Fail::Update)?;
        self.inner.update(person).await
    }

    async fn delete(&self, id: PersonId) -> AccessResult<()> {
        self.calls.lock().unwrap().push("delete");
        self.inner.delete(id).await
    }
}
