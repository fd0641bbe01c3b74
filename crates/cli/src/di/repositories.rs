use super::TelemetryServices;
use ferrous_tunnel_domain::config::HistoryConfig;
use ferrous_tunnel_infrastructure::repositories::TransactionHistory;
use std::sync::Arc;

pub struct Repositories {
    pub history: Arc<TransactionHistory>,
}

impl Repositories {
    pub fn new(config: &HistoryConfig, telemetry: &TelemetryServices) -> Self {
        Self {
            history: Arc::new(
                TransactionHistory::new(config.capacity).with_metrics(telemetry.metrics.clone()),
            ),
        }
    }
}
