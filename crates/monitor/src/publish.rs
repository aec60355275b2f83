//! Latest-report publishing
//!
//! Reports are published whole: readers always get the last committed
//! snapshot, never one under construction.

use ergonomics::FrameReport;
use std::sync::Arc;
use tokio::sync::watch;

/// Write side, owned by whoever drives the session
#[derive(Debug)]
pub struct ReportPublisher {
    tx: watch::Sender<Arc<FrameReport>>,
}

impl ReportPublisher {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Arc::new(FrameReport::default()));
        Self { tx }
    }

    /// Replace the latest report in one step
    pub fn publish(&self, report: Arc<FrameReport>) {
        self.tx.send_replace(report);
    }

    pub fn latest(&self) -> Arc<FrameReport> {
        Arc::clone(&self.tx.borrow())
    }

    pub fn subscribe(&self) -> ReportSubscriber {
        ReportSubscriber {
            rx: self.tx.subscribe(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for ReportPublisher {
    fn default() -> Self {
        Self::new()
    }
}

/// Read side for streaming or polling consumers
#[derive(Debug, Clone)]
pub struct ReportSubscriber {
    rx: watch::Receiver<Arc<FrameReport>>,
}

impl ReportSubscriber {
    /// Latest snapshot, no side effects
    pub fn latest(&self) -> Arc<FrameReport> {
        Arc::clone(&self.rx.borrow())
    }

    /// Wait for the next publication. `None` once the publisher is gone.
    pub async fn changed(&mut self) -> Option<Arc<FrameReport>> {
        self.rx.changed().await.ok()?;
        Some(Arc::clone(&self.rx.borrow_and_update()))
    }
}
