use serde::{Deserialize, Serialize};

/// Split-retry statistics for a TCP flow that was eligible for the retry.
///
/// Presence only means the flow was eligible; `split == 0` means no retry was attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RetryStats {
    /// Bytes uploaded before the reset.
    pub bytes: u32,
    /// Upload writes issued before the reset.
    pub chunks: u32,
    /// Whether the initial failure looked like a timeout.
    pub timeout: bool,
    /// Offset at which the retry split the stream.
    pub split: u32,
}

impl RetryStats {
    pub fn was_attempted(&self) -> bool {
        self.split != 0
    }
}

/// Counters for one closed TCP socket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TcpSocketSummary {
    pub upload_bytes: u64,
    pub download_bytes: u64,
    pub server_port: u16,
    /// TCP handshake latency.
    pub synack_ms: u32,
    pub duration_secs: u32,
    #[serde(default)]
    pub retry: Option<RetryStats>,
}

/// Counters for one closed UDP association.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UdpSocketSummary {
    pub upload_bytes: u64,
    pub download_bytes: u64,
    pub duration_secs: u32,
}

impl UdpSocketSummary {
    pub fn total_bytes(&self) -> u64 {
        self.upload_bytes.saturating_add(self.download_bytes)
    }
}

/// Snapshot produced once when a flow terminates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "protocol", rename_all = "lowercase")]
pub enum FlowSummary {
    Tcp(TcpSocketSummary),
    Udp(UdpSocketSummary),
}

impl FlowSummary {
    pub fn upload_bytes(&self) -> u64 {
        match self {
            FlowSummary::Tcp(s) => s.upload_bytes,
            FlowSummary::Udp(s) => s.upload_bytes,
        }
    }

    pub fn download_bytes(&self) -> u64 {
        match self {
            FlowSummary::Tcp(s) => s.download_bytes,
            FlowSummary::Udp(s) => s.download_bytes,
        }
    }

    pub fn protocol(&self) -> &'static str {
        match self {
            FlowSummary::Tcp(_) => "tcp",
            FlowSummary::Udp(_) => "udp",
        }
    }
}

impl From<TcpSocketSummary> for FlowSummary {
    fn from(summary: TcpSocketSummary) -> Self {
        FlowSummary::Tcp(summary)
    }
}

impl From<UdpSocketSummary> for FlowSummary {
    fn from(summary: UdpSocketSummary) -> Self {
        FlowSummary::Udp(summary)
    }
}
