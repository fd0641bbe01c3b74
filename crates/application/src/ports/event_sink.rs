use ferrous_tunnel_domain::TelemetryEvent;

/// Analytics sink for finished flow events.
///
/// Delivery is fire-and-forget: implementations must not block the caller and
/// swallow their own failures. Called concurrently from any transport thread.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: TelemetryEvent);
}
