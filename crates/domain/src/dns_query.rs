use super::RecordType;
use std::sync::Arc;

/// Structured form of an outgoing DNS query (id + first question).
/// Uses `Arc<str>` so transactions can be cloned into history without copying the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub id: u16,
    pub domain: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuery {
    pub fn new(id: u16, domain: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            id,
            domain: domain.into(),
            record_type,
        }
    }
}
