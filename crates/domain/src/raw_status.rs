use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome code reported by the DoH transport for one query.
///
/// The transport owns this enumeration, so any `i64` is representable here. Mapping it onto
/// the stable [`TransactionStatus`](crate::TransactionStatus) set is the job of the status
/// taxonomy in the application layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawStatus(pub i64);

impl RawStatus {
    pub const COMPLETE: RawStatus = RawStatus(0);
    pub const SEND_FAILED: RawStatus = RawStatus(1);
    pub const HTTP_ERROR: RawStatus = RawStatus(2);
    /// The outgoing query itself was malformed.
    pub const BAD_QUERY: RawStatus = RawStatus(3);
    pub const BAD_RESPONSE: RawStatus = RawStatus(4);
    pub const INTERNAL_ERROR: RawStatus = RawStatus(5);

    /// Every code the transport currently emits.
    pub const KNOWN: [RawStatus; 6] = [
        RawStatus::COMPLETE,
        RawStatus::SEND_FAILED,
        RawStatus::HTTP_ERROR,
        RawStatus::BAD_QUERY,
        RawStatus::BAD_RESPONSE,
        RawStatus::INTERNAL_ERROR,
    ];

    pub fn code(self) -> i64 {
        self.0
    }
}

impl From<i64> for RawStatus {
    fn from(code: i64) -> Self {
        RawStatus(code)
    }
}

impl fmt::Display for RawStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
