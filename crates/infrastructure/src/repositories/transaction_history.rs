use crate::dns::events::TelemetryMetrics;
use ferrous_tunnel_application::ports::TransactionRecorder;
use ferrous_tunnel_domain::Transaction;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};
use tracing::warn;

/// In-memory query history: the most recent `capacity` transactions plus a
/// running total of everything ever recorded.
pub struct TransactionHistory {
    capacity: usize,
    recent: Mutex<VecDeque<Transaction>>,
    total: AtomicU64,
    metrics: Option<TelemetryMetrics>,
}

impl TransactionHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            recent: Mutex::new(VecDeque::with_capacity(capacity)),
            total: AtomicU64::new(0),
            metrics: None,
        }
    }

    /// Also count recorded transactions per status in `metrics`.
    pub fn with_metrics(mut self, metrics: TelemetryMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Transactions recorded since startup, including evicted ones.
    pub fn total(&self) -> u64 {
        self.total.load(Ordering::Relaxed)
    }

    /// Retained transactions, newest first.
    pub fn recent(&self) -> Vec<Transaction> {
        self.lock().iter().rev().cloned().collect()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<Transaction>> {
        self.recent.lock().unwrap_or_else(|poisoned| {
            warn!("Transaction history lock poisoned, recovering");
            poisoned.into_inner()
        })
    }
}

impl TransactionRecorder for TransactionHistory {
    fn record_transaction(&self, transaction: Transaction) {
        self.total.fetch_add(1, Ordering::Relaxed);
        if let Some(ref metrics) = self.metrics {
            metrics.track_transaction(transaction.status);
        }

        if self.capacity == 0 {
            return;
        }

        let mut recent = self.lock();
        while recent.len() >= self.capacity {
            recent.pop_front();
        }
        recent.push_back(transaction);
    }
}
