use crate::dns::http_metric::HttpMetricRecord;
use dashmap::DashMap;
use ferrous_tunnel_domain::{EventField, EventName, TelemetryEvent, TransactionStatus};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Telemetry metrics tracker
///
/// Tracks what went through the sinks in a thread-safe manner.
/// Uses atomic operations for counters and DashMap for per-key breakdowns.
#[derive(Clone)]
pub struct TelemetryMetrics {
    /// Total number of events consumed
    total_events: Arc<AtomicU64>,

    /// Per-event-name counts
    event_counts: Arc<DashMap<EventName, u64>>,

    /// Split-retries seen in EARLY_RESET events
    retry_attempts: Arc<AtomicU64>,

    /// Split-retries whose flow downloaded data afterwards
    retry_successes: Arc<AtomicU64>,

    /// Upload/download totals across reported flows
    bytes_uploaded: Arc<AtomicU64>,
    bytes_downloaded: Arc<AtomicU64>,

    /// Per-status transaction counts
    transaction_counts: Arc<DashMap<TransactionStatus, u64>>,

    /// Finalized HTTP metrics and their summed latency
    http_metrics: Arc<AtomicU64>,
    total_http_latency_us: Arc<AtomicU64>,
}

impl TelemetryMetrics {
    pub fn new() -> Self {
        Self {
            total_events: Arc::new(AtomicU64::new(0)),
            event_counts: Arc::new(DashMap::new()),
            retry_attempts: Arc::new(AtomicU64::new(0)),
            retry_successes: Arc::new(AtomicU64::new(0)),
            bytes_uploaded: Arc::new(AtomicU64::new(0)),
            bytes_downloaded: Arc::new(AtomicU64::new(0)),
            transaction_counts: Arc::new(DashMap::new()),
            http_metrics: Arc::new(AtomicU64::new(0)),
            total_http_latency_us: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Track a telemetry event
    pub fn track_event(&self, event: &TelemetryEvent) {
        self.total_events.fetch_add(1, Ordering::Relaxed);

        self.event_counts
            .entry(event.name)
            .and_modify(|c| *c += 1)
            .or_insert(1);

        match event.name {
            EventName::Bytes | EventName::Udp => {
                let upload = event.get(EventField::Upload).unwrap_or(0).max(0) as u64;
                let download = event.get(EventField::Download).unwrap_or(0).max(0) as u64;
                self.bytes_uploaded.fetch_add(upload, Ordering::Relaxed);
                self.bytes_downloaded.fetch_add(download, Ordering::Relaxed);
            }
            EventName::EarlyReset => {
                self.retry_attempts.fetch_add(1, Ordering::Relaxed);
                if event.get(EventField::Retry) == Some(1) {
                    self.retry_successes.fetch_add(1, Ordering::Relaxed);
                }
            }
        }
    }

    /// Track a recorded transaction
    pub fn track_transaction(&self, status: TransactionStatus) {
        self.transaction_counts
            .entry(status)
            .and_modify(|c| *c += 1)
            .or_insert(1);
    }

    /// Track a finalized HTTP metric
    pub fn track_http_metric(&self, record: &HttpMetricRecord) {
        self.http_metrics.fetch_add(1, Ordering::Relaxed);
        self.total_http_latency_us
            .fetch_add(record.latency.as_micros() as u64, Ordering::Relaxed);
    }

    pub fn total_events(&self) -> u64 {
        self.total_events.load(Ordering::Relaxed)
    }

    pub fn event_count(&self, name: EventName) -> u64 {
        self.event_counts.get(&name).map(|v| *v).unwrap_or(0)
    }

    pub fn retry_attempts(&self) -> u64 {
        self.retry_attempts.load(Ordering::Relaxed)
    }

    pub fn retry_successes(&self) -> u64 {
        self.retry_successes.load(Ordering::Relaxed)
    }

    /// Share of attempted split-retries followed by downloaded data (0.0 to 1.0)
    pub fn retry_success_rate(&self) -> f64 {
        let attempts = self.retry_attempts();
        if attempts == 0 {
            return 0.0;
        }
        self.retry_successes() as f64 / attempts as f64
    }

    pub fn bytes_uploaded(&self) -> u64 {
        self.bytes_uploaded.load(Ordering::Relaxed)
    }

    pub fn bytes_downloaded(&self) -> u64 {
        self.bytes_downloaded.load(Ordering::Relaxed)
    }

    pub fn transaction_count(&self, status: TransactionStatus) -> u64 {
        self.transaction_counts
            .get(&status)
            .map(|v| *v)
            .unwrap_or(0)
    }

    pub fn total_transactions(&self) -> u64 {
        self.transaction_counts.iter().map(|e| *e.value()).sum()
    }

    pub fn http_metrics(&self) -> u64 {
        self.http_metrics.load(Ordering::Relaxed)
    }

    /// Average latency of finalized HTTP metrics in milliseconds
    pub fn avg_http_latency_ms(&self) -> f64 {
        let total = self.http_metrics();
        if total == 0 {
            return 0.0;
        }
        self.total_http_latency_us.load(Ordering::Relaxed) as f64 / total as f64 / 1000.0
    }
}

impl Default for TelemetryMetrics {
    fn default() -> Self {
        Self::new()
    }
}
