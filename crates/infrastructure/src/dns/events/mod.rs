//! Flow telemetry event system
//!
//! This module provides the non-blocking event path between flow reporting and
//! the analytics consumer.
//!
//! ## Components
//!
//! - `TelemetryEventEmitter`: Non-blocking [`EventSink`] for fire-and-forget events
//! - `TelemetryMetrics`: Thread-safe counters fed by the consumer task
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ferrous_tunnel_infrastructure::dns::events::{TelemetryEventEmitter, TelemetryMetrics};
//!
//! let (emitter, mut rx) = TelemetryEventEmitter::new_enabled();
//! let metrics = TelemetryMetrics::new();
//!
//! tokio::spawn(async move {
//!     while let Some(event) = rx.recv().await {
//!         metrics.track_event(&event);
//!     }
//! });
//! ```
//!
//! [`EventSink`]: ferrous_tunnel_application::ports::EventSink

pub mod emitter;
pub mod metrics;

pub use emitter::TelemetryEventEmitter;
pub use metrics::TelemetryMetrics;
