use crate::{DnsQuery, RawStatus};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Stable status of a finished DoH transaction.
///
/// This set is closed: every raw transport outcome is folded into one of these members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Complete,
    SendFailed,
    HttpError,
    BadResponse,
    InternalError,
}

impl TransactionStatus {
    pub const ALL: [TransactionStatus; 5] = [
        TransactionStatus::Complete,
        TransactionStatus::SendFailed,
        TransactionStatus::HttpError,
        TransactionStatus::BadResponse,
        TransactionStatus::InternalError,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Complete => "complete",
            TransactionStatus::SendFailed => "send_fail",
            TransactionStatus::HttpError => "http_error",
            TransactionStatus::BadResponse => "bad_response",
            TransactionStatus::InternalError => "internal_error",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, TransactionStatus::Complete)
    }
}

/// Raw outcome of one DoH request as reported by the transport.
///
/// `http_status == 0` means no HTTP exchange took place (e.g. the query never left the
/// device). Query and response are opaque wire bytes.
#[derive(Debug, Clone)]
pub struct DohSummary {
    pub query: Bytes,
    pub response: Option<Bytes>,
    pub latency: Duration,
    pub server: Option<Arc<str>>,
    pub status: RawStatus,
    pub http_status: u16,
}

impl DohSummary {
    pub fn http_attempted(&self) -> bool {
        self.http_status != 0
    }

    pub fn query_len(&self) -> usize {
        self.query.len()
    }

    pub fn response_len(&self) -> usize {
        self.response.as_ref().map_or(0, Bytes::len)
    }
}

/// One DoH request/response pair, built once and handed to the query history.
#[derive(Debug, Clone)]
pub struct Transaction {
    pub query: DnsQuery,
    /// When the query was issued (completion instant minus latency).
    pub query_time: Instant,
    pub response: Option<Bytes>,
    pub response_time: Duration,
    pub server_ip: Option<Arc<str>>,
    pub status: TransactionStatus,
    pub completed_at: DateTime<Utc>,
}

impl Transaction {
    pub fn response_time_ms(&self) -> u64 {
        self.response_time.as_millis() as u64
    }

    pub fn has_response(&self) -> bool {
        self.response.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_strings_are_distinct() {
        let mut names: Vec<_> = TransactionStatus::ALL.iter().map(|s| s.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), TransactionStatus::ALL.len());
    }

    #[test]
    fn test_only_complete_is_success() {
        for status in TransactionStatus::ALL {
            assert_eq!(status.is_success(), status == TransactionStatus::Complete);
        }
    }

    #[test]
    fn test_summary_lengths_without_response() {
        let summary = DohSummary {
            query: Bytes::from_static(&[0u8; 29]),
            response: None,
            latency: Duration::from_millis(40),
            server: None,
            status: RawStatus::SEND_FAILED,
            http_status: 0,
        };

        assert_eq!(summary.query_len(), 29);
        assert_eq!(summary.response_len(), 0);
        assert!(!summary.http_attempted());
    }
}
