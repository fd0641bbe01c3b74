//! Ferrous Tunnel Application Layer
//!
//! Ports the tunnel runtime and the reporting sinks plug into, plus the
//! classification and reporting logic that sits between them.
pub mod ports;
pub mod services;
pub mod use_cases;
