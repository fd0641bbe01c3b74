use crate::ports::EventSink;
use ferrous_tunnel_domain::{
    EventField, EventName, FlowSummary, RetryStats, TcpSocketSummary, TelemetryEvent,
    UdpSocketSummary,
};
use std::sync::Arc;
use tracing::{debug, instrument};

/// UDP flows moving fewer bytes than this (upload + download) are not reported.
///
/// One-off messages and pings dominate UDP; reporting them would cost more than they tell.
pub const UDP_THRESHOLD_BYTES: u64 = 10_000;

/// Turns closed-flow summaries into analytics events.
///
/// - TCP: always one `BYTES` event, plus an `EARLY_RESET` event when a split-retry was
///   actually attempted.
/// - UDP: one `UDP` event when the flow reached [`UDP_THRESHOLD_BYTES`].
pub struct ReportFlowUseCase {
    sink: Arc<dyn EventSink>,
}

impl ReportFlowUseCase {
    pub fn new(sink: Arc<dyn EventSink>) -> Self {
        Self { sink }
    }

    /// Emits the events for one flow and returns how many were emitted.
    #[instrument(skip(self, summary), fields(protocol = summary.protocol()))]
    pub fn execute(&self, summary: FlowSummary) -> usize {
        let events = flow_events(&summary);
        let emitted = events.len();

        for event in events {
            self.sink.emit(event);
        }

        debug!(
            upload = summary.upload_bytes(),
            download = summary.download_bytes(),
            emitted,
            "Flow closed"
        );

        emitted
    }
}

/// Events a flow produces, primary first.
pub fn flow_events(summary: &FlowSummary) -> Vec<TelemetryEvent> {
    match summary {
        FlowSummary::Tcp(tcp) => {
            let mut events = vec![bytes_event(tcp)];
            if let Some(reset) = tcp.retry.as_ref().and_then(|r| early_reset_event(r, tcp)) {
                events.push(reset);
            }
            events
        }
        FlowSummary::Udp(udp) => udp_event(udp).into_iter().collect(),
    }
}

fn bytes_event(summary: &TcpSocketSummary) -> TelemetryEvent {
    TelemetryEvent::new(EventName::Bytes)
        .with(EventField::Upload, saturating_i64(summary.upload_bytes))
        .with(EventField::Download, saturating_i64(summary.download_bytes))
        .with(EventField::Port, summary.server_port)
        .with(EventField::TcpHandshakeMs, summary.synack_ms)
        .with(EventField::Duration, summary.duration_secs)
}

/// `None` unless the retry was attempted (`split != 0`).
///
/// `RETRY` is derived from the owning flow: the retry counts as a success when the
/// socket downloaded anything at all. A later read on the same socket can therefore
/// mark a failed retry as successful.
fn early_reset_event(retry: &RetryStats, flow: &TcpSocketSummary) -> Option<TelemetryEvent> {
    if !retry.was_attempted() {
        return None;
    }

    Some(
        TelemetryEvent::new(EventName::EarlyReset)
            .with(EventField::Bytes, retry.bytes)
            .with(EventField::Chunks, retry.chunks)
            .with_flag(EventField::Timeout, retry.timeout)
            .with(EventField::Split, retry.split)
            .with_flag(EventField::Retry, flow.download_bytes > 0),
    )
}

fn udp_event(summary: &UdpSocketSummary) -> Option<TelemetryEvent> {
    if summary.total_bytes() < UDP_THRESHOLD_BYTES {
        return None;
    }

    Some(
        TelemetryEvent::new(EventName::Udp)
            .with(EventField::Upload, saturating_i64(summary.upload_bytes))
            .with(EventField::Download, saturating_i64(summary.download_bytes))
            .with(EventField::Duration, summary.duration_secs),
    )
}

fn saturating_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
