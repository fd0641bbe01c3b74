use ferrous_tunnel_application::ports::DnsQueryParser;
use ferrous_tunnel_domain::{DnsQuery, DomainError, RecordType};
use hickory_proto::op::Message;
use tracing::trace;

/// Decodes outgoing DoH query bytes with `hickory-proto`.
///
/// Only the header id and the first question are kept; everything else in the
/// message is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct HickoryQueryParser;

impl HickoryQueryParser {
    pub fn new() -> Self {
        Self
    }
}

impl DnsQueryParser for HickoryQueryParser {
    fn parse(&self, wire: &[u8]) -> Result<DnsQuery, DomainError> {
        let message = Message::from_vec(wire).map_err(|e| {
            DomainError::InvalidDnsQuery(format!("Failed to parse DNS query: {}", e))
        })?;

        let question = message.queries().first().ok_or_else(|| {
            DomainError::InvalidDnsQuery("DNS query has no question".to_string())
        })?;

        let name = question.name().to_utf8();
        let domain = match name.trim_end_matches('.') {
            "" => ".",
            trimmed => trimmed,
        };
        let record_type = RecordType::from_u16(u16::from(question.query_type()));

        trace!(id = message.id(), domain, record_type = %record_type, "DNS query parsed");

        Ok(DnsQuery::new(message.id(), domain, record_type))
    }
}
