//! Conditional parallel iteration for portfolio-scale workloads.
//!
//! Uses rayon when the `parallel` feature is enabled, the configuration
//! allows it, and the collection is large enough to amortize the
//! scheduling cost. Falls back to sequential iteration otherwise.

use crate::config::AnalyticsConfig;

/// Maps a function over items, conditionally using parallel iteration.
#[allow(unused_variables)]
pub(crate) fn maybe_parallel_map<T, U, F>(items: &[T], config: &AnalyticsConfig, f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if config.should_parallelize(items.len()) {
            return items.par_iter().map(f).collect();
        }
    }

    items.iter().map(f).collect()
}
