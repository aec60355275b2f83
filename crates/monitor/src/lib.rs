//! Ergonomics Monitor
//!
//! Driver-side plumbing around an analysis session: rate-limited ticks,
//! latest-report publishing for concurrent readers, and landmark replay.

pub mod cache;
pub mod publish;
pub mod replay;

pub use cache::{ReportCache, DEFAULT_MIN_INTERVAL};
pub use publish::{ReportPublisher, ReportSubscriber};
pub use replay::{ReplayError, TickRecord};

use ergonomics::{FaceFrame, FrameReport, PoseFrame, Session};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::subscriber::SetGlobalDefaultError;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Session plus the rate limiter and publisher in front of it
pub struct Monitor {
    session: Session,
    cache: ReportCache,
    publisher: ReportPublisher,
}

impl Monitor {
    pub fn new(session: Session, min_interval: Duration) -> Self {
        Self {
            session,
            cache: ReportCache::new(min_interval),
            publisher: ReportPublisher::new(),
        }
    }

    /// Run one tick unless the last one was less than `min_interval` ago,
    /// in which case the cached report is returned and the frames are dropped
    pub fn process(
        &mut self,
        now: Instant,
        pose: Option<&PoseFrame>,
        face: Option<&FaceFrame>,
    ) -> Arc<FrameReport> {
        let Self {
            session,
            cache,
            publisher,
        } = self;

        cache.get_or_compute(now, || {
            let report = session.tick(pose, face);
            publisher.publish(Arc::clone(&report));
            report
        })
    }

    /// Latest published report, no recomputation
    pub fn latest(&self) -> Arc<FrameReport> {
        self.publisher.latest()
    }

    pub fn subscribe(&self) -> ReportSubscriber {
        self.publisher.subscribe()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn cache(&self) -> &ReportCache {
        &self.cache
    }
}

/// Initialize logging to stderr (stdout carries reports)
pub fn init_logging(verbose: bool, json: bool) -> Result<(), SetGlobalDefaultError> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);

    if json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    }
}
