use crate::ports::HttpMetric;
use ferrous_tunnel_domain::{DohSummary, DomainError};
use std::fmt;
use std::sync::Arc;

/// Opaque handle pairing a DoH request with its completion.
///
/// Created by [`BeginQueryUseCase`](super::BeginQueryUseCase) with a running HTTP metric,
/// carried untouched through the transport and consumed by
/// [`CompleteQueryUseCase`](super::CompleteQueryUseCase). Completion takes the token by
/// value, so a token cannot be completed twice. A token that is never completed just
/// drops its metric unreported.
pub struct QueryToken {
    url: Arc<str>,
    metric: Box<dyn HttpMetric>,
}

impl QueryToken {
    pub(crate) fn new(url: impl Into<Arc<str>>, metric: Box<dyn HttpMetric>) -> Self {
        Self {
            url: url.into(),
            metric,
        }
    }

    /// Annotates the metric with the exchange's sizes and HTTP status, then stops it.
    pub(crate) fn finalize(self, summary: &DohSummary) -> Result<(), DomainError> {
        let mut metric = self.metric;
        metric.set_request_payload_size(summary.query_len() as u64);
        metric.set_http_response_code(summary.http_status);
        metric.set_response_payload_size(summary.response_len() as u64);
        metric.stop()
    }
}

impl fmt::Debug for QueryToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryToken").field("url", &self.url).finish()
    }
}
