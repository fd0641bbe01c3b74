use serde::{Deserialize, Serialize};

/// Telemetry switches
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelemetryConfig {
    /// Forward flow events to the sink (default: true).
    /// When false the sink is a no-op; classification still runs.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Time DoH requests with HTTP metrics (default: true)
    #[serde(default = "default_true")]
    pub http_metrics: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            http_metrics: true,
        }
    }
}

fn default_true() -> bool {
    true
}
