use ferrous_tunnel_domain::{DohSummary, FlowSummary};

/// Callbacks the tunnel runtime invokes as flows and DoH requests finish.
///
/// `Token` is opaque to the runtime: it is returned by [`on_query_start`] and handed
/// back untouched to [`on_query_complete`], so the runtime never depends on the
/// listener's types. Every method may be called from any thread.
///
/// [`on_query_start`]: TunnelListener::on_query_start
/// [`on_query_complete`]: TunnelListener::on_query_complete
pub trait TunnelListener: Send + Sync {
    type Token: Send + 'static;

    /// Called once per terminated TCP or UDP flow.
    fn on_flow_closed(&self, summary: FlowSummary);

    /// Called once per outgoing DoH request.
    fn on_query_start(&self, url: &str) -> Self::Token;

    /// Called once per DoH resolution. `token` is `None` when the query did not go
    /// through a request started with [`on_query_start`](TunnelListener::on_query_start).
    fn on_query_complete(&self, token: Option<Self::Token>, summary: &DohSummary);
}
