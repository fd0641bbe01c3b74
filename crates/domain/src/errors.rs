use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid DNS query: {0}")]
    InvalidDnsQuery(String),

    #[error("HTTP metric stopped before it was started: {0}")]
    MetricNotStarted(String),

    #[error("Metric sink closed: {0}")]
    MetricSinkClosed(String),
}
