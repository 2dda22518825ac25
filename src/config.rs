//! Router configuration.
//!
//! The REMB emission interval is exposed as a named, overridable constant
//! rather than a magic number buried in the elector. The shape here, a
//! `Serialize`/`Deserialize` options struct plus a fluent builder, scales
//! down to the one tunable this router currently exposes, with room to
//! grow without breaking callers who construct it with `..Default::default()`.
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default REMB emission interval: steady-state observations are throttled
/// to at most one emission per this many milliseconds unless a qualifying
/// bandwidth decrease forces an immediate one.
pub const DEFAULT_REMB_INTERVAL_MS: u64 = 200;

/// Configuration for a [`crate::PacketRouter`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouterConfig {
    /// Minimum spacing between non-urgent REMB emissions, in milliseconds.
    #[serde(default = "default_remb_interval_ms")]
    pub remb_interval_ms: u64,
}

fn default_remb_interval_ms() -> u64 {
    DEFAULT_REMB_INTERVAL_MS
}

impl RouterConfig {
    /// The configured REMB interval as a [`Duration`].
    pub fn remb_interval(&self) -> Duration {
        Duration::from_millis(self.remb_interval_ms)
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            remb_interval_ms: DEFAULT_REMB_INTERVAL_MS,
        }
    }
}

/// Fluent builder for [`RouterConfig`].
#[derive(Debug, Default)]
pub struct RouterConfigBuilder {
    config: RouterConfig,
}

impl RouterConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the REMB emission interval.
    pub fn remb_interval(mut self, interval: Duration) -> Self {
        self.config.remb_interval_ms = interval.as_millis() as u64;
        self
    }

    pub fn build(self) -> RouterConfig {
        self.config
    }
}
