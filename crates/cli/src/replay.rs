//! Replays recorded tunnel callbacks (JSON lines) through a [`TunnelListener`].
//!
//! One record per line, tagged by `type`:
//!
//! ```text
//! {"type":"tcp","upload_bytes":500,"download_bytes":200,"server_port":443,"synack_ms":30,"duration_secs":4,"retry":{"bytes":500,"chunks":3,"timeout":true,"split":500}}
//! {"type":"udp","upload_bytes":9000,"download_bytes":2000,"duration_secs":12}
//! {"type":"query","url":"https://dns.google/dns-query","query":"<base64>","response":"<base64>","latency_secs":0.08,"server":"8.8.8.8","status":0,"http_status":200}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

use anyhow::Context;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use bytes::Bytes;
use ferrous_tunnel_application::ports::TunnelListener;
use ferrous_tunnel_domain::{
    DohSummary, EventName, RawStatus, TcpSocketSummary, TransactionStatus, UdpSocketSummary,
};
use ferrous_tunnel_infrastructure::dns::TelemetryMetrics;
use ferrous_tunnel_infrastructure::repositories::TransactionHistory;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::BufRead;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ReplayRecord {
    Tcp(TcpSocketSummary),
    Udp(UdpSocketSummary),
    Query(QueryRecord),
}

#[derive(Debug, Deserialize)]
pub struct QueryRecord {
    #[serde(default = "default_url")]
    pub url: String,
    /// Base64 DNS wire bytes
    pub query: String,
    #[serde(default)]
    pub response: Option<String>,
    pub latency_secs: f64,
    #[serde(default)]
    pub server: Option<String>,
    pub status: RawStatus,
    #[serde(default)]
    pub http_status: u16,
    /// `false` replays a completion that arrives without a token.
    #[serde(default = "default_true")]
    pub correlated: bool,
}

fn default_url() -> String {
    "https://dns.google/dns-query".to_string()
}

fn default_true() -> bool {
    true
}

impl QueryRecord {
    fn to_summary(&self) -> anyhow::Result<DohSummary> {
        let query = STANDARD.decode(&self.query).context("query is not valid base64")?;
        let response = self
            .response
            .as_deref()
            .map(|r| STANDARD.decode(r).context("response is not valid base64"))
            .transpose()?;
        let latency = Duration::try_from_secs_f64(self.latency_secs)
            .with_context(|| format!("invalid latency {}", self.latency_secs))?;

        Ok(DohSummary {
            query: Bytes::from(query),
            response: response.map(Bytes::from),
            latency,
            server: self.server.as_deref().map(Arc::from),
            status: self.status,
            http_status: self.http_status,
        })
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReplayStats {
    pub flows: u64,
    pub queries: u64,
}

pub fn replay<L: TunnelListener>(listener: &L, input: impl BufRead) -> anyhow::Result<ReplayStats> {
    let mut stats = ReplayStats::default();

    for (index, line) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("Failed to read line {}", line_no))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let record: ReplayRecord = serde_json::from_str(line)
            .with_context(|| format!("Invalid replay record on line {}", line_no))?;

        match record {
            ReplayRecord::Tcp(summary) => {
                listener.on_flow_closed(summary.into());
                stats.flows += 1;
            }
            ReplayRecord::Udp(summary) => {
                listener.on_flow_closed(summary.into());
                stats.flows += 1;
            }
            ReplayRecord::Query(record) => {
                let summary = record
                    .to_summary()
                    .with_context(|| format!("Invalid query record on line {}", line_no))?;
                let token = record.correlated.then(|| listener.on_query_start(&record.url));
                listener.on_query_complete(token, &summary);
                stats.queries += 1;
            }
        }
    }

    debug!(flows = stats.flows, queries = stats.queries, "Replay finished");
    Ok(stats)
}

/// What the replay produced, printed as JSON on stdout.
#[derive(Debug, Serialize)]
pub struct ReplaySummary {
    #[serde(flatten)]
    pub stats: ReplayStats,
    pub events: BTreeMap<&'static str, u64>,
    pub transactions: BTreeMap<&'static str, u64>,
    pub retry_success_rate: f64,
    pub http_metrics: u64,
    pub avg_http_latency_ms: f64,
    pub history_retained: usize,
}

impl ReplaySummary {
    pub fn collect(
        stats: ReplayStats,
        metrics: &TelemetryMetrics,
        history: &TransactionHistory,
    ) -> Self {
        let events = [EventName::Bytes, EventName::EarlyReset, EventName::Udp]
            .into_iter()
            .map(|name| (name.as_str(), metrics.event_count(name)))
            .collect();
        let transactions = TransactionStatus::ALL
            .into_iter()
            .map(|status| (status.as_str(), metrics.transaction_count(status)))
            .collect();

        Self {
            stats,
            events,
            transactions,
            retry_success_rate: metrics.retry_success_rate(),
            http_metrics: metrics.http_metrics(),
            avg_http_latency_ms: metrics.avg_http_latency_ms(),
            history_retained: history.recent().len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferrous_tunnel_domain::FlowSummary;
    use std::io::Cursor;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;

    /// Hands out numbered tokens and records what comes back.
    #[derive(Default)]
    struct RecordingListener {
        next_token: AtomicU32,
        flows: Mutex<Vec<FlowSummary>>,
        completions: Mutex<Vec<(Option<u32>, RawStatus, usize)>>,
    }

    impl TunnelListener for RecordingListener {
        type Token = u32;

        fn on_flow_closed(&self, summary: FlowSummary) {
            self.flows.lock().unwrap().push(summary);
        }

        fn on_query_start(&self, _url: &str) -> u32 {
            self.next_token.fetch_add(1, Ordering::SeqCst)
        }

        fn on_query_complete(&self, token: Option<u32>, summary: &DohSummary) {
            self.completions
                .lock()
                .unwrap()
                .push((token, summary.status, summary.query_len()));
        }
    }

    #[test]
    fn test_replay_dispatches_records() {
        let input = r#"
# recorded session
{"type":"tcp","upload_bytes":500,"download_bytes":200,"server_port":443,"synack_ms":30,"duration_secs":4,"retry":{"bytes":500,"chunks":3,"timeout":true,"split":500}}
{"type":"udp","upload_bytes":9000,"download_bytes":2000,"duration_secs":12}
{"type":"query","query":"AAEC","latency_secs":0.05,"status":0,"http_status":200}
{"type":"query","query":"AAEC","latency_secs":0.05,"status":3,"correlated":false}
"#;
        let listener = RecordingListener::default();

        let stats = replay(&listener, Cursor::new(input)).unwrap();

        assert_eq!(stats, ReplayStats { flows: 2, queries: 2 });

        let flows = listener.flows.lock().unwrap();
        match flows[0] {
            FlowSummary::Tcp(tcp) => assert_eq!(tcp.retry.map(|r| r.split), Some(500)),
            FlowSummary::Udp(_) => panic!("expected a TCP flow first"),
        }

        let completions = listener.completions.lock().unwrap();
        assert_eq!(completions[0], (Some(0), RawStatus::COMPLETE, 3));
        assert_eq!(completions[1], (None, RawStatus::BAD_QUERY, 3));
    }

    #[test]
    fn test_invalid_line_reports_line_number() {
        let input = "{\"type\":\"udp\",\"upload_bytes\":1,\"download_bytes\":1,\"duration_secs\":1}\nnot json\n";
        let err = replay(&RecordingListener::default(), Cursor::new(input)).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_negative_latency_is_rejected() {
        let input = r#"{"type":"query","query":"AAEC","latency_secs":-1.0,"status":0}"#;
        assert!(replay(&RecordingListener::default(), Cursor::new(input)).is_err());
    }
}
