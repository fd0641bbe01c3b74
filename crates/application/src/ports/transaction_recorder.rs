use ferrous_tunnel_domain::Transaction;

/// Consumer of finished DoH transactions (query history, dashboards).
pub trait TransactionRecorder: Send + Sync {
    fn record_transaction(&self, transaction: Transaction);
}
