use super::QueryToken;
use crate::ports::{HttpMethod, HttpMetricFactory};
use std::sync::Arc;
use tracing::trace;

pub struct BeginQueryUseCase {
    metrics: Arc<dyn HttpMetricFactory>,
}

impl BeginQueryUseCase {
    pub fn new(metrics: Arc<dyn HttpMetricFactory>) -> Self {
        Self { metrics }
    }

    /// Starts timing a DoH POST to `url` and returns the token that will finish it.
    pub fn execute(&self, url: &str) -> QueryToken {
        let mut metric = self.metrics.new_http_metric(url, HttpMethod::Post);
        metric.start();
        trace!(url, "DoH query started");
        QueryToken::new(url, metric)
    }
}
