use std::time::Duration;

/// Simulated round-trip delay per access-layer operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    pub list: Duration,
    pub get: Duration,
    pub create: Duration,
    pub update: Duration,
    pub delete: Duration,
}

impl Latency {
    /// No delay at all (tests, benchmarks).
    pub const fn none() -> Self {
        Self::uniform(Duration::ZERO)
    }

    /// The same delay for every operation.
    pub const fn uniform(delay: Duration) -> Self {
        Self {
            list: delay,
            get: delay,
            create: delay,
            update: delay,
            delete: delay,
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            list: Duration::from_millis(800),
            get: Duration::from_millis(500),
            create: Duration::from_millis(600),
            update: Duration::from_millis(600),
            delete: Duration::from_millis(500),
        }
    }
}
