#![allow(dead_code)]
use bytes::Bytes;
use ferrous_tunnel_domain::{
    DohSummary, FlowSummary, RawStatus, RetryStats, TcpSocketSummary, UdpSocketSummary,
};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RecordType as HickoryRecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

/// DoH endpoints used as metric URLs
pub struct DohServerBuilder;

impl DohServerBuilder {
    pub fn google_https() -> String {
        "https://dns.google/dns-query".to_string()
    }

    pub fn cloudflare_https() -> String {
        "https://1.1.1.1/dns-query".to_string()
    }
}

/// Wire-format DNS queries
pub struct QueryWireBuilder;

impl QueryWireBuilder {
    pub fn query(domain: &str, record_type: HickoryRecordType, id: u16) -> Vec<u8> {
        let mut query = Query::new();
        query.set_name(Name::from_str(domain).unwrap());
        query.set_query_type(record_type);
        query.set_query_class(DNSClass::IN);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(query);

        Self::serialize(&message)
    }

    /// A well-formed header with an empty question section
    pub fn without_question(id: u16) -> Vec<u8> {
        let message = Message::new(id, MessageType::Query, OpCode::Query);
        Self::serialize(&message)
    }

    pub fn truncated() -> Vec<u8> {
        vec![0x12, 0x34, 0x01]
    }

    fn serialize(message: &Message) -> Vec<u8> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);
        message.emit(&mut encoder).unwrap();
        buf
    }
}

/// Transport-side summaries
pub struct SummaryBuilder;

impl SummaryBuilder {
    pub fn doh(query: Vec<u8>, status: RawStatus, http_status: u16) -> DohSummary {
        DohSummary {
            query: Bytes::from(query),
            response: Some(Bytes::from_static(&[0u8; 64])),
            latency: Duration::from_millis(85),
            server: Some(Arc::from("8.8.4.4")),
            status,
            http_status,
        }
    }

    pub fn tcp(upload: u64, download: u64, retry: Option<RetryStats>) -> FlowSummary {
        FlowSummary::Tcp(TcpSocketSummary {
            upload_bytes: upload,
            download_bytes: download,
            server_port: 443,
            synack_ms: 42,
            duration_secs: 9,
            retry,
        })
    }

    pub fn udp(upload: u64, download: u64) -> FlowSummary {
        FlowSummary::Udp(UdpSocketSummary {
            upload_bytes: upload,
            download_bytes: download,
            duration_secs: 2,
        })
    }
}
