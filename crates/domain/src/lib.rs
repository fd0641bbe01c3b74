//! Ferrous Tunnel Domain Layer
pub mod config;
pub mod dns_query;
pub mod errors;
pub mod flow_summary;
pub mod raw_status;
pub mod record_type;
pub mod telemetry_event;
pub mod transaction;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_query::DnsQuery;
pub use errors::DomainError;
pub use flow_summary::{FlowSummary, RetryStats, TcpSocketSummary, UdpSocketSummary};
pub use raw_status::RawStatus;
pub use record_type::RecordType;
pub use telemetry_event::{EventField, EventName, TelemetryEvent};
pub use transaction::{DohSummary, Transaction, TransactionStatus};
