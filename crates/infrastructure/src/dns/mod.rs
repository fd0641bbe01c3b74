pub mod event_logger;
pub mod events;
pub mod http_metric;
pub mod query_parser;

pub use event_logger::TelemetryEventLogger;
pub use events::{TelemetryEventEmitter, TelemetryMetrics};
pub use http_metric::{HttpMetricRecord, NoopHttpMetricFactory, TimedHttpMetricFactory};
pub use query_parser::HickoryQueryParser;
