//! Person record storage.

pub mod in_memory;
pub mod seed;

pub use in_memory::PersonStore;
