pub mod repositories;
pub mod telemetry;
pub mod use_cases;

pub use repositories::Repositories;
pub use telemetry::TelemetryServices;
pub use use_cases::UseCases;

use ferrous_tunnel_domain::Config;
use ferrous_tunnel_infrastructure::tunnel::TelemetryListener;

/// Fully wired listener graph.
///
/// Dropping `listener` closes the telemetry channels, which lets the consumer
/// task in `telemetry` finish.
pub struct Container {
    pub listener: TelemetryListener,
    pub telemetry: TelemetryServices,
    pub repositories: Repositories,
}

impl Container {
    /// Must be called from inside a Tokio runtime (spawns the event consumer).
    pub fn build(config: &Config) -> Self {
        let mut telemetry = TelemetryServices::new(&config.telemetry);
        let repositories = Repositories::new(&config.history, &telemetry);
        let use_cases = UseCases::new(&mut telemetry, &repositories);

        Self {
            listener: use_cases.into_listener(),
            telemetry,
            repositories,
        }
    }
}
