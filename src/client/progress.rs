use futures::future::{abortable, AbortHandle};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval_at, Instant};

/// Periodically reports how long a request has been waiting for its
/// response. The reporting task stops as soon as the logger is dropped.
pub struct ProgressLogger {
    handle: AbortHandle,
    reports: Arc<AtomicU64>,
}

impl ProgressLogger {
    pub fn start(url: String, period: Duration) -> Self {
        let reports = Arc::new(AtomicU64::new(0));
        let counter = reports.clone();
        let (task, handle) = abortable(async move {
            let mut ticks = interval_at(Instant::now() + period, period);
            loop {
                ticks.tick().await;
                let count = counter.fetch_add(1, Ordering::SeqCst) + 1;
                let waited = period * count as u32;
                info!(
                    "Waiting for {} to respond... ({} seconds)",
                    url,
                    waited.as_secs()
                );
            }
        });
        tokio::spawn(task);
        Self { handle, reports }
    }

    /// Number of progress lines logged so far.
    pub fn reports(&self) -> u64 {
        self.reports.load(Ordering::SeqCst)
    }
}

impl Drop for ProgressLogger {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
