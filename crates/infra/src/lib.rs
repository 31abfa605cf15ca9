//! Infrastructure layer: in-memory store, access layer, configuration.

pub mod access;
pub mod config;
pub mod store;

pub use access::{AccessError, AccessResult, Latency, PeopleApi, SimulatedPeopleApi};
pub use config::{AppConfig, ConfigError};
pub use store::PersonStore;
