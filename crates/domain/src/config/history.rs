use serde::{Deserialize, Serialize};

/// Query history kept in memory for display
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HistoryConfig {
    /// Number of most recent transactions retained (default: 100)
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

fn default_capacity() -> usize {
    100
}
