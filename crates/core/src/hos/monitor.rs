//! Live HOS monitoring loop
//!
//! Re-runs the evaluation pipeline on a fixed interval so open-interval
//! totals keep tracking the wall clock. The engine itself stays pure; this
//! is the one place that owns a ticker. Join handles are tracked,
//! cancellation is explicit, and every fetch is wrapped in a timeout.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use async_trait::async_trait;
//! use waylog_core::hos::LogMonitor;
//! use waylog_core::DutyStatusSource;
//! use waylog_domain::{DutyStatusChange, Result};
//!
//! struct EmptySource;
//!
//! #[async_trait]
//! impl DutyStatusSource for EmptySource {
//!     async fn fetch_changes(&self) -> Result<Vec<DutyStatusChange>> {
//!         Ok(Vec::new())
//!     }
//! }
//!
//! # async fn example() -> waylog_core::hos::MonitorResult<()> {
//! let mut monitor = LogMonitor::new(Arc::new(EmptySource));
//! let mut snapshots = monitor.subscribe();
//! monitor.start()?;
//! // ... application runs, snapshots.changed().await on each refresh ...
//! monitor.stop().await?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::Duration;

use chrono::{Local, NaiveDateTime};
use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use waylog_domain::{DailyTotals, DutyStatus, HosSnapshot, MonitorConfig};

use crate::hos::evaluate;
use crate::hos::ports::DutyStatusSource;

/// Clock used to stamp evaluations; injectable for deterministic tests
type Clock = Arc<dyn Fn() -> NaiveDateTime + Send + Sync>;

/// Errors from monitor lifecycle operations
#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("monitor is already running")]
    AlreadyRunning,

    #[error("monitor is not running")]
    NotRunning,

    #[error("refresh task did not stop within {0:?}")]
    JoinTimeout(Duration),

    #[error("refresh task failed: {0}")]
    Join(String),
}

/// Result type alias for monitor operations
pub type MonitorResult<T> = std::result::Result<T, MonitorError>;

/// Periodic duty-log evaluation with explicit lifecycle management.
///
/// Each tick fetches the full day from the [`DutyStatusSource`], runs
/// [`evaluate`], and publishes the snapshot on a watch channel. A failed
/// or timed-out fetch is logged and the previous snapshot stays current;
/// the monitor keeps producing best-effort results against a live,
/// possibly-unavailable log service.
pub struct LogMonitor {
    source: Arc<dyn DutyStatusSource>,
    config: MonitorConfig,
    clock: Clock,
    snapshot_tx: watch::Sender<HosSnapshot>,
    snapshot_rx: watch::Receiver<HosSnapshot>,
    task_handle: Option<JoinHandle<()>>,
    cancellation: CancellationToken,
}

impl LogMonitor {
    /// Create a monitor with the default configuration.
    pub fn new(source: Arc<dyn DutyStatusSource>) -> Self {
        Self::with_config(MonitorConfig::default(), source)
    }

    /// Create a monitor with a custom configuration.
    pub fn with_config(config: MonitorConfig, source: Arc<dyn DutyStatusSource>) -> Self {
        let clock: Clock = Arc::new(|| Local::now().naive_local());
        let (snapshot_tx, snapshot_rx) = watch::channel(idle_snapshot((clock.as_ref())()));

        Self {
            source,
            config,
            clock,
            snapshot_tx,
            snapshot_rx,
            task_handle: None,
            cancellation: CancellationToken::new(),
        }
    }

    /// Replace the wall clock. Tests use this to pin `now`.
    pub fn with_clock(
        mut self,
        clock: impl Fn() -> NaiveDateTime + Send + Sync + 'static,
    ) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Start the refresh loop. The first evaluation runs immediately.
    pub fn start(&mut self) -> MonitorResult<()> {
        if self.is_running() {
            return Err(MonitorError::AlreadyRunning);
        }

        self.cancellation = CancellationToken::new();

        let cancel = self.cancellation.clone();
        let source = self.source.clone();
        let tx = self.snapshot_tx.clone();
        let clock = self.clock.clone();
        let refresh = Duration::from_secs(self.config.refresh_interval_secs.max(1));
        let fetch_timeout = Duration::from_secs(self.config.fetch_timeout_secs);

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(refresh);
            loop {
                tokio::select! {
                    _ = cancel.cancelled() => {
                        debug!("Log monitor cancelled");
                        break;
                    }
                    _ = ticker.tick() => {
                        let now = (clock.as_ref())();
                        refresh_snapshot(source.as_ref(), &tx, now, fetch_timeout).await;
                    }
                }
            }
        });

        self.task_handle = Some(handle);
        info!(refresh_secs = self.config.refresh_interval_secs, "Log monitor started");
        Ok(())
    }

    /// Stop the refresh loop and wait for the task to finish.
    pub async fn stop(&mut self) -> MonitorResult<()> {
        if !self.is_running() {
            return Err(MonitorError::NotRunning);
        }

        self.cancellation.cancel();

        if let Some(handle) = self.task_handle.take() {
            let join_timeout = Duration::from_secs(self.config.join_timeout_secs);
            match tokio::time::timeout(join_timeout, handle).await {
                Ok(Ok(())) => {}
                Ok(Err(err)) => return Err(MonitorError::Join(err.to_string())),
                Err(_) => return Err(MonitorError::JoinTimeout(join_timeout)),
            }
        }

        info!("Log monitor stopped");
        self.cancellation = CancellationToken::new();
        Ok(())
    }

    /// Returns true while the refresh task is active.
    pub fn is_running(&self) -> bool {
        self.task_handle.as_ref().map_or(false, |handle| !handle.is_finished())
    }

    /// Watch channel carrying the most recent snapshot.
    pub fn subscribe(&self) -> watch::Receiver<HosSnapshot> {
        self.snapshot_rx.clone()
    }

    /// The most recently published snapshot.
    pub fn latest(&self) -> HosSnapshot {
        self.snapshot_rx.borrow().clone()
    }
}

impl Drop for LogMonitor {
    fn drop(&mut self) {
        if self.is_running() {
            warn!("LogMonitor dropped while running; cancelling refresh task");
            self.cancellation.cancel();
        }
    }
}

/// Snapshot published before the first successful fetch
fn idle_snapshot(as_of: NaiveDateTime) -> HosSnapshot {
    HosSnapshot {
        totals: DailyTotals::default(),
        findings: Vec::new(),
        current_status: DutyStatus::OffDuty,
        as_of,
    }
}

async fn refresh_snapshot(
    source: &dyn DutyStatusSource,
    tx: &watch::Sender<HosSnapshot>,
    now: NaiveDateTime,
    fetch_timeout: Duration,
) {
    match tokio::time::timeout(fetch_timeout, source.fetch_changes()).await {
        Ok(Ok(changes)) => {
            let snapshot = evaluate(&changes, now);
            debug!(
                driving_hours = snapshot.totals.driving,
                findings = snapshot.findings.len(),
                "Published HOS snapshot"
            );
            if tx.send(snapshot).is_err() {
                debug!("No snapshot receivers");
            }
        }
        Ok(Err(err)) => {
            warn!(error = %err, "Duty log fetch failed; keeping previous snapshot");
        }
        Err(_) => {
            warn!(
                timeout_secs = fetch_timeout.as_secs(),
                "Duty log fetch timed out; keeping previous snapshot"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use waylog_domain::{DutyStatusChange, Result, WaylogError};

    fn ts(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    fn day_log() -> Vec<DutyStatusChange> {
        vec![DutyStatusChange {
            status: DutyStatus::Driving,
            start_time: ts("2025-03-10T06:00:00"),
            end_time: Some(ts("2025-03-10T14:00:00")),
            location: "I-80 W".to_string(),
            notes: None,
        }]
    }

    struct CountingSource {
        fetches: AtomicUsize,
    }

    impl CountingSource {
        fn new() -> Self {
            Self { fetches: AtomicUsize::new(0) }
        }

        fn fetch_count(&self) -> usize {
            self.fetches.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl DutyStatusSource for CountingSource {
        async fn fetch_changes(&self) -> Result<Vec<DutyStatusChange>> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            Ok(day_log())
        }
    }

    /// Succeeds on the first fetch, fails on every later one.
    struct FlakySource {
        fetches: AtomicUsize,
    }

    #[async_trait]
    impl DutyStatusSource for FlakySource {
        async fn fetch_changes(&self) -> Result<Vec<DutyStatusChange>> {
            let attempt = self.fetches.fetch_add(1, Ordering::SeqCst);
            if attempt == 0 {
                Ok(day_log())
            } else {
                Err(WaylogError::Source("log service unreachable".to_string()))
            }
        }
    }

    fn fast_config() -> MonitorConfig {
        MonitorConfig { refresh_interval_secs: 1, fetch_timeout_secs: 2, join_timeout_secs: 2 }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn publishes_an_evaluated_snapshot() {
        let source = Arc::new(CountingSource::new());
        let mut monitor = LogMonitor::with_config(fast_config(), source.clone())
            .with_clock(|| ts("2025-03-10T15:00:00"));
        let mut snapshots = monitor.subscribe();

        monitor.start().expect("start succeeds");
        tokio::time::timeout(Duration::from_secs(2), snapshots.changed())
            .await
            .expect("snapshot published")
            .expect("channel open");

        let snapshot = monitor.latest();
        assert!((snapshot.totals.driving - 8.0).abs() < 1e-9);
        assert!(snapshot.findings.iter().any(|f| f.rule == "30-Minute Break Required"));
        assert_eq!(snapshot.as_of, ts("2025-03-10T15:00:00"));
        assert!(source.fetch_count() >= 1);

        monitor.stop().await.expect("stop succeeds");
        assert!(!monitor.is_running());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn double_start_is_rejected() {
        let mut monitor = LogMonitor::with_config(fast_config(), Arc::new(CountingSource::new()));

        monitor.start().expect("first start");
        let err = monitor.start().expect_err("second start fails");
        assert!(matches!(err, MonitorError::AlreadyRunning));

        monitor.stop().await.expect("stop succeeds");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn stop_without_start_is_rejected() {
        let mut monitor = LogMonitor::with_config(fast_config(), Arc::new(CountingSource::new()));
        let err = monitor.stop().await.expect_err("stop fails");
        assert!(matches!(err, MonitorError::NotRunning));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn restart_after_stop_succeeds() {
        let mut monitor = LogMonitor::with_config(fast_config(), Arc::new(CountingSource::new()));

        monitor.start().expect("start succeeds");
        monitor.stop().await.expect("stop succeeds");
        assert!(!monitor.is_running());

        monitor.start().expect("start again");
        monitor.stop().await.expect("stop again");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn fetch_failure_keeps_the_previous_snapshot() {
        let source = Arc::new(FlakySource { fetches: AtomicUsize::new(0) });
        let mut monitor = LogMonitor::with_config(fast_config(), source.clone())
            .with_clock(|| ts("2025-03-10T15:00:00"));
        let mut snapshots = monitor.subscribe();

        monitor.start().expect("start succeeds");
        tokio::time::timeout(Duration::from_secs(2), snapshots.changed())
            .await
            .expect("first snapshot published")
            .expect("channel open");
        let first = monitor.latest();

        // Wait out at least one failing refresh tick
        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert!(source.fetches.load(Ordering::SeqCst) >= 2);

        assert_eq!(monitor.latest(), first);
        assert!(monitor.is_running());

        monitor.stop().await.expect("stop succeeds");
    }
}
