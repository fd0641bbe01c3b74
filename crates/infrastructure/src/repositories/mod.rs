pub mod transaction_history;

pub use transaction_history::TransactionHistory;
