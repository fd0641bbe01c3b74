#![allow(dead_code)]

use bytes::Bytes;
use ferrous_tunnel_application::ports::{
    DnsQueryParser, EventSink, HttpMethod, HttpMetric, HttpMetricFactory, TransactionRecorder,
};
use ferrous_tunnel_domain::{
    DnsQuery, DohSummary, DomainError, RawStatus, RecordType, TelemetryEvent, Transaction,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

// ============================================================================
// Mock EventSink
// ============================================================================

#[derive(Default)]
pub struct RecordingEventSink {
    events: Mutex<Vec<TelemetryEvent>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<TelemetryEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl EventSink for RecordingEventSink {
    fn emit(&self, event: TelemetryEvent) {
        self.events.lock().unwrap().push(event);
    }
}

// ============================================================================
// Mock TransactionRecorder
// ============================================================================

#[derive(Default)]
pub struct RecordingTransactionRecorder {
    transactions: Mutex<Vec<Transaction>>,
}

impl RecordingTransactionRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transactions(&self) -> Vec<Transaction> {
        self.transactions.lock().unwrap().clone()
    }
}

impl TransactionRecorder for RecordingTransactionRecorder {
    fn record_transaction(&self, transaction: Transaction) {
        self.transactions.lock().unwrap().push(transaction);
    }
}

// ============================================================================
// Mock DnsQueryParser
// ============================================================================

/// Treats the payload as a UTF-8 domain name; `MALFORMED_QUERY` fails to parse.
pub struct MockQueryParser;

pub const MALFORMED_QUERY: &[u8] = b"\xff\x00garbage";

impl DnsQueryParser for MockQueryParser {
    fn parse(&self, wire: &[u8]) -> Result<DnsQuery, DomainError> {
        if wire == MALFORMED_QUERY || wire.is_empty() {
            return Err(DomainError::InvalidDnsQuery("mock parse failure".to_string()));
        }
        let domain = std::str::from_utf8(wire)
            .map_err(|e| DomainError::InvalidDnsQuery(e.to_string()))?;
        Ok(DnsQuery::new(0x1234, domain, RecordType::A))
    }
}

// ============================================================================
// Mock HttpMetric
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoppedMetric {
    pub url: String,
    pub request_bytes: u64,
    pub http_status: u16,
    pub response_bytes: u64,
}

#[derive(Default)]
pub struct MockMetricFactory {
    started: AtomicUsize,
    stopped: Arc<Mutex<Vec<StoppedMetric>>>,
    fail_on_stop: bool,
}

impl MockMetricFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_on_stop: true,
            ..Self::default()
        }
    }

    pub fn started(&self) -> usize {
        self.started.load(Ordering::SeqCst)
    }

    pub fn stopped(&self) -> Vec<StoppedMetric> {
        self.stopped.lock().unwrap().clone()
    }
}

impl HttpMetricFactory for MockMetricFactory {
    fn new_http_metric(&self, url: &str, method: HttpMethod) -> Box<dyn HttpMetric> {
        assert_eq!(method, HttpMethod::Post);
        self.started.fetch_add(1, Ordering::SeqCst);
        Box::new(MockMetric {
            record: StoppedMetric {
                url: url.to_string(),
                ..StoppedMetric::default()
            },
            running: false,
            stopped: self.stopped.clone(),
            fail_on_stop: self.fail_on_stop,
        })
    }
}

struct MockMetric {
    record: StoppedMetric,
    running: bool,
    stopped: Arc<Mutex<Vec<StoppedMetric>>>,
    fail_on_stop: bool,
}

impl HttpMetric for MockMetric {
    fn start(&mut self) {
        self.running = true;
    }

    fn set_request_payload_size(&mut self, bytes: u64) {
        self.record.request_bytes = bytes;
    }

    fn set_http_response_code(&mut self, code: u16) {
        self.record.http_status = code;
    }

    fn set_response_payload_size(&mut self, bytes: u64) {
        self.record.response_bytes = bytes;
    }

    fn stop(self: Box<Self>) -> Result<(), DomainError> {
        let this = *self;
        assert!(this.running, "metric stopped without being started");
        if this.fail_on_stop {
            return Err(DomainError::MetricSinkClosed("mock".to_string()));
        }
        this.stopped.lock().unwrap().push(this.record);
        Ok(())
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn doh_summary(query: &'static [u8], status: RawStatus, http_status: u16) -> DohSummary {
    DohSummary {
        query: Bytes::from_static(query),
        response: Some(Bytes::from_static(b"response-bytes")),
        latency: Duration::from_millis(120),
        server: Some("1.1.1.1".into()),
        status,
        http_status,
    }
}
