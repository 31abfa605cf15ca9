use std::sync::Arc;

use roster_infra::{AppConfig, PeopleApi, PersonStore, SimulatedPeopleApi};

/// Shared handles available to every handler.
#[derive(Clone)]
pub struct AppServices {
    people: Arc<dyn PeopleApi>,
}

impl AppServices {
    pub fn new(people: Arc<dyn PeopleApi>) -> Self {
        Self { people }
    }

    pub fn people(&self) -> &dyn PeopleApi {
        self.people.as_ref()
    }
}

/// Wire the in-memory store and simulated access layer from config.
pub fn build_services(config: &AppConfig) -> AppServices {
    let store = if config.seed {
        PersonStore::seeded()
    } else {
        PersonStore::new()
    };
    let records = store.len();
    let api = SimulatedPeopleApi::new(store, config.latency);
    tracing::info!(records, latency = ?api.latency(), "in-memory people store ready");
    AppServices::new(Arc::new(api))
}
