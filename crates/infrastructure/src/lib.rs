//! Ferrous Tunnel Infrastructure Layer
//!
//! Adapters behind the application ports: DNS decoding on `hickory-proto`,
//! channel-backed telemetry sinks, the in-memory query history and the
//! [`TunnelListener`](ferrous_tunnel_application::ports::TunnelListener)
//! the tunnel runtime talks to.
pub mod dns;
pub mod repositories;
pub mod tunnel;
