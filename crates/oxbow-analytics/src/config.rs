//! Explicit analytics configuration.
//!
//! Configuration is a plain value passed into the calls that need it;
//! there is no process-wide singleton to initialize or mutate.

use serde::{Deserialize, Serialize};

/// Default collection size above which parallel iteration kicks in.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 32;

/// Configuration for portfolio-scale analytics.
///
/// Parallelism only takes effect when the `parallel` cargo feature is
/// enabled; without it these settings are inert and everything runs
/// sequentially.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Whether parallel iteration is allowed.
    pub parallel: bool,
    /// Minimum collection size before parallel iteration is used.
    pub parallel_threshold: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl AnalyticsConfig {
    /// Creates a configuration that always runs sequentially.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            parallel_threshold: usize::MAX,
        }
    }

    /// Sets the parallel threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Returns true if a collection of `len` items should be processed in
    /// parallel under this configuration.
    #[must_use]
    pub fn should_parallelize(&self, len: usize) -> bool {
        self.parallel && len >= self.parallel_threshold
    }
}
