use super::StatusTaxonomy;
use chrono::{DateTime, Utc};
use ferrous_tunnel_domain::{DnsQuery, DohSummary, Transaction};
use std::sync::Arc;
use std::time::Instant;

/// Assembles a [`Transaction`] from a decoded query and the transport's raw outcome.
#[derive(Debug, Clone)]
pub struct TransactionBuilder {
    taxonomy: Arc<StatusTaxonomy>,
}

impl TransactionBuilder {
    pub fn new(taxonomy: Arc<StatusTaxonomy>) -> Self {
        Self { taxonomy }
    }

    /// `now` is the completion instant; the query is dated `now - latency`.
    /// A missing response is kept as-is whatever the status says.
    pub fn build(
        &self,
        query: DnsQuery,
        summary: &DohSummary,
        now: Instant,
        completed_at: DateTime<Utc>,
    ) -> Transaction {
        let query_time = now.checked_sub(summary.latency).unwrap_or(now);

        Transaction {
            query,
            query_time,
            response: summary.response.clone(),
            response_time: summary.latency,
            server_ip: summary.server.clone(),
            status: self.taxonomy.classify(summary.status),
            completed_at,
        }
    }
}
