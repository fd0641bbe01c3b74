use crate::dns::events::TelemetryMetrics;
use crate::dns::http_metric::HttpMetricRecord;
use ferrous_tunnel_domain::TelemetryEvent;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

const MAX_BATCH: usize = 100;

/// Background task that consumes telemetry events and HTTP metrics.
///
/// Events are drained in batches (up to 100 per wakeup), counted in
/// [`TelemetryMetrics`] and written as structured log lines under the
/// `telemetry` target, with the event payload serialized as JSON.
///
/// ## Graceful Shutdown
///
/// When every sender is dropped, both receivers return `None` and the task exits
/// after processing all pending events.
///
/// ## Example
///
/// ```rust,ignore
/// let (emitter, events_rx) = TelemetryEventEmitter::new_enabled();
/// let (factory, metrics_rx) = TimedHttpMetricFactory::new();
/// let handle = TelemetryEventLogger::new(TelemetryMetrics::new()).start(events_rx, metrics_rx);
///
/// // ...
///
/// drop(emitter);
/// drop(factory);
/// handle.await.unwrap();
/// ```
pub struct TelemetryEventLogger {
    metrics: TelemetryMetrics,
}

impl TelemetryEventLogger {
    pub fn new(metrics: TelemetryMetrics) -> Self {
        Self { metrics }
    }

    pub fn start(
        self,
        mut events: mpsc::UnboundedReceiver<TelemetryEvent>,
        mut http_metrics: mpsc::UnboundedReceiver<HttpMetricRecord>,
    ) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            debug!("TelemetryEventLogger: Starting consumer");

            let mut batch = Vec::with_capacity(MAX_BATCH);
            let mut total_batches = 0u64;
            let mut events_open = true;
            let mut metrics_open = true;

            while events_open || metrics_open {
                tokio::select! {
                    event = events.recv(), if events_open => match event {
                        Some(event) => {
                            batch.push(event);
                            while let Ok(event) = events.try_recv() {
                                batch.push(event);
                                if batch.len() >= MAX_BATCH {
                                    break;
                                }
                            }

                            total_batches += 1;
                            self.process_batch(std::mem::take(&mut batch));
                        }
                        None => events_open = false,
                    },
                    record = http_metrics.recv(), if metrics_open => match record {
                        Some(record) => self.process_http_metric(&record),
                        None => metrics_open = false,
                    },
                }
            }

            debug!(
                total_events = self.metrics.total_events(),
                total_batches,
                "TelemetryEventLogger: Consumer shutting down gracefully"
            );
        })
    }

    fn process_batch(&self, events: Vec<TelemetryEvent>) {
        for event in &events {
            self.metrics.track_event(event);

            match serde_json::to_string(&event.fields) {
                Ok(payload) => info!(
                    target: "telemetry",
                    event = event.name.as_str(),
                    payload = %payload,
                    "Telemetry event"
                ),
                Err(e) => warn!(
                    event = event.name.as_str(),
                    error = %e,
                    "Failed to serialize telemetry event"
                ),
            }
        }
    }

    fn process_http_metric(&self, record: &HttpMetricRecord) {
        self.metrics.track_http_metric(record);

        info!(
            target: "telemetry",
            url = %record.url,
            method = record.method,
            http_status = record.http_status,
            latency_ms = record.latency.as_millis() as u64,
            request_bytes = record.request_bytes,
            response_bytes = record.response_bytes,
            "HTTP metric"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dns::events::TelemetryEventEmitter;
    use crate::dns::http_metric::TimedHttpMetricFactory;
    use ferrous_tunnel_application::ports::{EventSink, HttpMethod, HttpMetricFactory};
    use ferrous_tunnel_domain::{EventField, EventName};

    #[tokio::test]
    async fn test_consumer_drains_and_exits() {
        let metrics = TelemetryMetrics::new();
        let (emitter, events_rx) = TelemetryEventEmitter::new_enabled();
        let (factory, metrics_rx) = TimedHttpMetricFactory::new();
        let handle = TelemetryEventLogger::new(metrics.clone()).start(events_rx, metrics_rx);

        for _ in 0..250 {
            emitter.emit(
                TelemetryEvent::new(EventName::Bytes)
                    .with(EventField::Upload, 10)
                    .with(EventField::Download, 20),
            );
        }

        let mut metric = factory.new_http_metric("https://dns.google/dns-query", HttpMethod::Post);
        metric.start();
        metric.stop().unwrap();

        drop(emitter);
        drop(factory);
        handle.await.unwrap();

        assert_eq!(metrics.total_events(), 250);
        assert_eq!(metrics.event_count(EventName::Bytes), 250);
        assert_eq!(metrics.bytes_uploaded(), 2_500);
        assert_eq!(metrics.http_metrics(), 1);
    }
}
