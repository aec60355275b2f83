//! Time-stamped report cache
//!
//! Lets a fast polling consumer call into the pipeline more often than the
//! capture produces frames: calls inside `min_interval` of the last
//! computation reuse that report and never touch analyzer state.

use ergonomics::FrameReport;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::trace;

/// Minimum spacing between recomputations (~20 fps)
pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_millis(50);

/// Cache holding the last computed report and when it was computed
#[derive(Debug, Clone)]
pub struct ReportCache {
    /// Reports younger than this are reused
    min_interval: Duration,
    /// Computation time and report
    entry: Option<(Instant, Arc<FrameReport>)>,
    /// Calls served from the cache
    hits: u64,
}

impl ReportCache {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            entry: None,
            hits: 0,
        }
    }

    /// Return the cached report if it is fresh at `now`, otherwise run
    /// `compute` and store its result stamped with `now`
    pub fn get_or_compute<F>(&mut self, now: Instant, compute: F) -> Arc<FrameReport>
    where
        F: FnOnce() -> Arc<FrameReport>,
    {
        if let Some((stamp, report)) = &self.entry {
            if now.saturating_duration_since(*stamp) < self.min_interval {
                self.hits += 1;
                trace!("Serving cached report ({} hits)", self.hits);
                return Arc::clone(report);
            }
        }

        let report = compute();
        self.entry = Some((now, Arc::clone(&report)));
        report
    }

    /// Last computed report, if any
    pub fn cached(&self) -> Option<Arc<FrameReport>> {
        self.entry.as_ref().map(|(_, report)| Arc::clone(report))
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }
}

impl Default for ReportCache {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_INTERVAL)
    }
}
