use ferrous_tunnel_domain::{DnsQuery, DomainError};

/// Decodes outgoing DNS wire bytes into a structured query.
pub trait DnsQueryParser: Send + Sync {
    fn parse(&self, wire: &[u8]) -> Result<DnsQuery, DomainError>;
}
