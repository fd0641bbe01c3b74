use ferrous_tunnel_application::ports::EventSink;
use ferrous_tunnel_domain::TelemetryEvent;
use tokio::sync::mpsc;

/// Non-blocking event emitter for flow telemetry events.
///
/// This emitter uses an unbounded channel to send events without ever blocking
/// the transport thread that closed the flow. Events are fire-and-forget: if the
/// channel is closed, events are silently dropped (reporting is best-effort).
///
/// ## Performance Characteristics
///
/// - **Enabled**: one channel send per event
/// - **Disabled**: no-op when sender = None
/// - **Never blocks**: Uses `UnboundedSender::send()` which never awaits
///
/// ## Thread Safety
///
/// This struct is `Clone` and can be shared across threads safely.
#[derive(Clone)]
pub struct TelemetryEventEmitter {
    /// - Some: Emitter is enabled, events are sent
    /// - None: Emitter is disabled, emit() is a no-op
    sender: Option<mpsc::UnboundedSender<TelemetryEvent>>,
}

impl TelemetryEventEmitter {
    /// Creates a disabled emitter.
    ///
    /// Used when telemetry is switched off in the configuration; flows are
    /// still classified but nothing leaves the process.
    pub fn new_disabled() -> Self {
        Self { sender: None }
    }

    /// Creates an enabled emitter and returns the receiver for the consumer task.
    pub fn new_enabled() -> (Self, mpsc::UnboundedReceiver<TelemetryEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let emitter = Self { sender: Some(tx) };
        (emitter, rx)
    }

    /// Returns true if the emitter is enabled.
    pub fn is_enabled(&self) -> bool {
        self.sender.is_some()
    }
}

impl EventSink for TelemetryEventEmitter {
    fn emit(&self, event: TelemetryEvent) {
        if let Some(ref tx) = self.sender {
            let _ = tx.send(event);
        }
    }
}

impl Default for TelemetryEventEmitter {
    fn default() -> Self {
        Self::new_disabled()
    }
}

impl std::fmt::Debug for TelemetryEventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelemetryEventEmitter")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
