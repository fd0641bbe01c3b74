use ferrous_tunnel_application::ports::{EventSink, HttpMetricFactory};
use ferrous_tunnel_domain::config::TelemetryConfig;
use ferrous_tunnel_domain::TelemetryEvent;
use ferrous_tunnel_infrastructure::dns::{
    HttpMetricRecord, NoopHttpMetricFactory, TelemetryEventEmitter, TelemetryEventLogger,
    TelemetryMetrics, TimedHttpMetricFactory,
};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::info;

pub struct TelemetryServices {
    pub metrics: TelemetryMetrics,
    sink: Option<Arc<dyn EventSink>>,
    http_metrics: Option<Arc<dyn HttpMetricFactory>>,
    consumer: Option<JoinHandle<()>>,
}

impl TelemetryServices {
    pub fn new(config: &TelemetryConfig) -> Self {
        let metrics = TelemetryMetrics::new();

        let (emitter, events_rx) = if config.enabled {
            TelemetryEventEmitter::new_enabled()
        } else {
            (
                TelemetryEventEmitter::new_disabled(),
                closed_channel::<TelemetryEvent>(),
            )
        };

        let (http_metrics, metrics_rx) = if config.http_metrics {
            let (factory, rx) = TimedHttpMetricFactory::new();
            (Arc::new(factory) as Arc<dyn HttpMetricFactory>, rx)
        } else {
            (
                Arc::new(NoopHttpMetricFactory) as Arc<dyn HttpMetricFactory>,
                closed_channel::<HttpMetricRecord>(),
            )
        };

        let consumer = TelemetryEventLogger::new(metrics.clone()).start(events_rx, metrics_rx);

        info!(
            events = emitter.is_enabled(),
            http_metrics = config.http_metrics,
            "Telemetry services initialized"
        );

        Self {
            metrics,
            sink: Some(Arc::new(emitter)),
            http_metrics: Some(http_metrics),
            consumer: Some(consumer),
        }
    }

    /// Hands the sink and metric factory over to the use cases, which become
    /// their only owners; dropping the listener then closes the channels.
    pub(super) fn take_producers(&mut self) -> (Arc<dyn EventSink>, Arc<dyn HttpMetricFactory>) {
        let sink = self
            .sink
            .take()
            .unwrap_or_else(|| Arc::new(TelemetryEventEmitter::new_disabled()) as Arc<dyn EventSink>);
        let http_metrics = self
            .http_metrics
            .take()
            .unwrap_or_else(|| Arc::new(NoopHttpMetricFactory) as Arc<dyn HttpMetricFactory>);
        (sink, http_metrics)
    }

    /// Waits for the consumer to drain; call after the listener is dropped.
    pub async fn shutdown(&mut self) -> anyhow::Result<()> {
        if let Some(consumer) = self.consumer.take() {
            consumer.await?;
        }
        Ok(())
    }
}

fn closed_channel<T>() -> mpsc::UnboundedReceiver<T> {
    let (_, rx) = mpsc::unbounded_channel();
    rx
}
