pub mod dns_query_parser;
pub mod event_sink;
pub mod http_metric;
pub mod transaction_recorder;
pub mod tunnel_listener;

pub use dns_query_parser::DnsQueryParser;
pub use event_sink::EventSink;
pub use http_metric::{HttpMethod, HttpMetric, HttpMetricFactory};
pub use transaction_recorder::TransactionRecorder;
pub use tunnel_listener::TunnelListener;
