use ferrous_tunnel_application::ports::{HttpMethod, HttpMetric, HttpMetricFactory};
use ferrous_tunnel_domain::DomainError;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// A finalized HTTP metric, queued for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpMetricRecord {
    pub url: Arc<str>,
    pub method: &'static str,
    pub latency: Duration,
    pub request_bytes: u64,
    pub response_bytes: u64,
    pub http_status: u16,
}

/// Creates [`TimedHttpMetric`]s that report into an unbounded channel.
#[derive(Clone)]
pub struct TimedHttpMetricFactory {
    sender: mpsc::UnboundedSender<HttpMetricRecord>,
}

impl TimedHttpMetricFactory {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<HttpMetricRecord>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { sender: tx }, rx)
    }
}

impl HttpMetricFactory for TimedHttpMetricFactory {
    fn new_http_metric(&self, url: &str, method: HttpMethod) -> Box<dyn HttpMetric> {
        Box::new(TimedHttpMetric {
            url: Arc::from(url),
            method,
            started_at: None,
            request_bytes: 0,
            response_bytes: 0,
            http_status: 0,
            sender: self.sender.clone(),
        })
    }
}

/// Wall-clock timer for one HTTP request.
pub struct TimedHttpMetric {
    url: Arc<str>,
    method: HttpMethod,
    started_at: Option<Instant>,
    request_bytes: u64,
    response_bytes: u64,
    http_status: u16,
    sender: mpsc::UnboundedSender<HttpMetricRecord>,
}

impl HttpMetric for TimedHttpMetric {
    fn start(&mut self) {
        self.started_at = Some(Instant::now());
    }

    fn set_request_payload_size(&mut self, bytes: u64) {
        self.request_bytes = bytes;
    }

    fn set_http_response_code(&mut self, code: u16) {
        self.http_status = code;
    }

    fn set_response_payload_size(&mut self, bytes: u64) {
        self.response_bytes = bytes;
    }

    fn stop(self: Box<Self>) -> Result<(), DomainError> {
        let started_at = self
            .started_at
            .ok_or_else(|| DomainError::MetricNotStarted(self.url.to_string()))?;

        let record = HttpMetricRecord {
            url: self.url.clone(),
            method: self.method.as_str(),
            latency: started_at.elapsed(),
            request_bytes: self.request_bytes,
            response_bytes: self.response_bytes,
            http_status: self.http_status,
        };

        self.sender
            .send(record)
            .map_err(|e| DomainError::MetricSinkClosed(e.0.url.to_string()))
    }
}

/// Factory used when HTTP metrics are disabled; its metrics record nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHttpMetricFactory;

impl HttpMetricFactory for NoopHttpMetricFactory {
    fn new_http_metric(&self, _url: &str, _method: HttpMethod) -> Box<dyn HttpMetric> {
        Box::new(NoopHttpMetric)
    }
}

pub struct NoopHttpMetric;

impl HttpMetric for NoopHttpMetric {
    fn start(&mut self) {}

    fn set_request_payload_size(&mut self, _bytes: u64) {}

    fn set_http_response_code(&mut self, _code: u16) {}

    fn set_response_payload_size(&mut self, _bytes: u64) {}

    fn stop(self: Box<Self>) -> Result<(), DomainError> {
        Ok(())
    }
}
