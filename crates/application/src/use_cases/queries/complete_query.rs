use super::QueryToken;
use crate::ports::{DnsQueryParser, TransactionRecorder};
use crate::services::TransactionBuilder;
use chrono::Utc;
use ferrous_tunnel_domain::{DohSummary, TransactionStatus};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument, warn};

/// Finishes one DoH request: reports its HTTP metric and records the transaction.
pub struct CompleteQueryUseCase {
    parser: Arc<dyn DnsQueryParser>,
    builder: TransactionBuilder,
    recorder: Arc<dyn TransactionRecorder>,
}

impl CompleteQueryUseCase {
    pub fn new(
        parser: Arc<dyn DnsQueryParser>,
        builder: TransactionBuilder,
        recorder: Arc<dyn TransactionRecorder>,
    ) -> Self {
        Self {
            parser,
            builder,
            recorder,
        }
    }

    /// Returns the recorded status, or `None` when the query bytes did not decode.
    ///
    /// An undecodable query drops the whole transaction and discards the token's
    /// metric unreported. Without a token, or when no HTTP exchange happened, only
    /// the metric is skipped. A metric that fails to stop is logged and does not
    /// prevent the transaction from being recorded.
    #[instrument(skip_all, fields(raw_status = summary.status.code(), http_status = summary.http_status))]
    pub fn execute(
        &self,
        token: Option<QueryToken>,
        summary: &DohSummary,
    ) -> Option<TransactionStatus> {
        let query = match self.parser.parse(&summary.query) {
            Ok(query) => query,
            Err(e) => {
                debug!(error = %e, "Dropping DoH transaction with undecodable query");
                return None;
            }
        };

        match token {
            Some(token) if summary.http_attempted() => {
                if let Err(e) = token.finalize(summary) {
                    warn!(error = %e, "Failed to finalize DoH HTTP metric");
                }
            }
            Some(_) => debug!("No HTTP exchange, discarding DoH metric"),
            None => {}
        }

        let transaction = self
            .builder
            .build(query, summary, Instant::now(), Utc::now());
        let status = transaction.status;

        debug!(
            domain = %transaction.query.domain,
            record_type = %transaction.query.record_type,
            dnssec = transaction.query.record_type.is_dnssec(),
            status = status.as_str(),
            latency_ms = transaction.response_time_ms(),
            "DoH transaction completed"
        );

        self.recorder.record_transaction(transaction);
        Some(status)
    }
}
