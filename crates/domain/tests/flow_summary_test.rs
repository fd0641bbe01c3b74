use ferrous_tunnel_domain::{FlowSummary, RetryStats, TcpSocketSummary, UdpSocketSummary};

fn tcp(retry: Option<RetryStats>) -> TcpSocketSummary {
    TcpSocketSummary {
        upload_bytes: 500,
        download_bytes: 200,
        server_port: 443,
        synack_ms: 30,
        duration_secs: 4,
        retry,
    }
}

#[test]
fn test_retry_presence_is_not_an_attempt() {
    let retry = RetryStats {
        bytes: 120,
        chunks: 1,
        timeout: false,
        split: 0,
    };
    assert!(!retry.was_attempted());
}

#[test]
fn test_retry_with_split_was_attempted() {
    let retry = RetryStats {
        split: 64,
        ..RetryStats::default()
    };
    assert!(retry.was_attempted());
}

#[test]
fn test_udp_total_bytes_saturates() {
    let udp = UdpSocketSummary {
        upload_bytes: u64::MAX,
        download_bytes: 10,
        duration_secs: 1,
    };
    assert_eq!(udp.total_bytes(), u64::MAX);
}

#[test]
fn test_flow_summary_accessors() {
    let flow = FlowSummary::from(tcp(None));

    assert_eq!(flow.protocol(), "tcp");
    assert_eq!(flow.upload_bytes(), 500);
    assert_eq!(flow.download_bytes(), 200);

    let flow = FlowSummary::from(UdpSocketSummary {
        upload_bytes: 9000,
        download_bytes: 2000,
        duration_secs: 12,
    });
    assert_eq!(flow.protocol(), "udp");
    assert_eq!(flow.upload_bytes(), 9000);
}

#[test]
fn test_tcp_summary_without_retry_field_deserializes() {
    let json = r#"{"protocol":"tcp","upload_bytes":1,"download_bytes":2,"server_port":853,"synack_ms":5,"duration_secs":1}"#;

    let flow: FlowSummary = serde_json::from_str(json).unwrap();

    match flow {
        FlowSummary::Tcp(summary) => {
            assert_eq!(summary.server_port, 853);
            assert!(summary.retry.is_none());
        }
        FlowSummary::Udp(_) => panic!("expected a TCP summary"),
    }
}

#[test]
fn test_flow_summary_is_tagged_by_protocol() {
    let value = serde_json::to_value(FlowSummary::from(tcp(Some(RetryStats {
        bytes: 500,
        chunks: 3,
        timeout: true,
        split: 500,
    }))))
    .unwrap();

    assert_eq!(value["protocol"], "tcp");
    assert_eq!(value["retry"]["split"], 500);
    assert_eq!(value["retry"]["timeout"], true);
}
