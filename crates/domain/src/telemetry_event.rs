use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Name of an analytics event handed to the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventName {
    /// One closed TCP socket.
    Bytes,
    /// An attempted split-retry after an early connection reset.
    EarlyReset,
    /// One closed UDP association above the reporting threshold.
    Udp,
}

impl EventName {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventName::Bytes => "BYTES",
            EventName::EarlyReset => "EARLY_RESET",
            EventName::Udp => "UDP",
        }
    }
}

/// Field key inside an event payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventField {
    Upload,
    Download,
    Port,
    TcpHandshakeMs,
    Duration,
    Bytes,
    Chunks,
    Timeout,
    Split,
    Retry,
}

/// Structured event: a name plus integer-valued fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryEvent {
    pub name: EventName,
    pub fields: BTreeMap<EventField, i64>,
}

impl TelemetryEvent {
    pub fn new(name: EventName) -> Self {
        Self {
            name,
            fields: BTreeMap::new(),
        }
    }

    pub fn with(mut self, field: EventField, value: impl Into<i64>) -> Self {
        self.fields.insert(field, value.into());
        self
    }

    pub fn with_flag(self, field: EventField, flag: bool) -> Self {
        self.with(field, i64::from(flag))
    }

    pub fn get(&self, field: EventField) -> Option<i64> {
        self.fields.get(&field).copied()
    }
}
