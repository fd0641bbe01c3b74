use ferrous_tunnel_domain::{RawStatus, TransactionStatus};
use rustc_hash::FxHashMap;
use tracing::warn;

/// Raw transport outcome → stable status.
///
/// Collapsing several raw codes into one status happens here and only here; a new
/// transport code needs a new row, not a new branch.
pub const STATUS_TABLE: [(RawStatus, TransactionStatus); 6] = [
    (RawStatus::COMPLETE, TransactionStatus::Complete),
    (RawStatus::SEND_FAILED, TransactionStatus::SendFailed),
    (RawStatus::HTTP_ERROR, TransactionStatus::HttpError),
    // No dedicated member for a malformed outgoing query.
    (RawStatus::BAD_QUERY, TransactionStatus::InternalError),
    (RawStatus::BAD_RESPONSE, TransactionStatus::BadResponse),
    (RawStatus::INTERNAL_ERROR, TransactionStatus::InternalError),
];

/// Immutable classification table, built once at startup and shared behind an `Arc`.
///
/// Read-only after construction, so concurrent lookups need no synchronization.
#[derive(Debug, Clone)]
pub struct StatusTaxonomy {
    table: FxHashMap<RawStatus, TransactionStatus>,
}

impl StatusTaxonomy {
    pub fn new() -> Self {
        Self::from_entries(STATUS_TABLE)
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (RawStatus, TransactionStatus)>) -> Self {
        Self {
            table: entries.into_iter().collect(),
        }
    }

    /// Classify a raw outcome. Codes missing from the table are reported as
    /// `InternalError` so the pipeline never fails on a transport upgrade.
    pub fn classify(&self, raw: RawStatus) -> TransactionStatus {
        match self.table.get(&raw) {
            Some(status) => *status,
            None => {
                warn!(raw_status = raw.code(), "Unmapped DoH status code, classifying as internal error");
                TransactionStatus::InternalError
            }
        }
    }

    pub fn is_mapped(&self, raw: RawStatus) -> bool {
        self.table.contains_key(&raw)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Default for StatusTaxonomy {
    fn default() -> Self {
        Self::new()
    }
}
