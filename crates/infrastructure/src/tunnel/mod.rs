pub mod listener;

pub use listener::TelemetryListener;
