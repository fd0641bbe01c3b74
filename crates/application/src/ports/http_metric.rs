use ferrous_tunnel_domain::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// Latency/size recorder for one HTTP request.
///
/// Started when the request goes out, annotated and stopped when it completes.
/// `stop` consumes the metric and queues it for reporting.
pub trait HttpMetric: Send {
    fn start(&mut self);

    fn set_request_payload_size(&mut self, bytes: u64);

    fn set_http_response_code(&mut self, code: u16);

    fn set_response_payload_size(&mut self, bytes: u64);

    fn stop(self: Box<Self>) -> Result<(), DomainError>;
}

pub trait HttpMetricFactory: Send + Sync {
    fn new_http_metric(&self, url: &str, method: HttpMethod) -> Box<dyn HttpMetric>;
}
