use ferrous_tunnel_application::ports::TunnelListener;
use ferrous_tunnel_application::use_cases::{
    BeginQueryUseCase, CompleteQueryUseCase, QueryToken, ReportFlowUseCase,
};
use ferrous_tunnel_domain::{DohSummary, FlowSummary};

/// The listener handed to the tunnel runtime.
///
/// Flow closures go to [`ReportFlowUseCase`]; DoH requests are paired through
/// [`QueryToken`]s from [`BeginQueryUseCase`] to [`CompleteQueryUseCase`].
pub struct TelemetryListener {
    report_flow: ReportFlowUseCase,
    begin_query: BeginQueryUseCase,
    complete_query: CompleteQueryUseCase,
}

impl TelemetryListener {
    pub fn new(
        report_flow: ReportFlowUseCase,
        begin_query: BeginQueryUseCase,
        complete_query: CompleteQueryUseCase,
    ) -> Self {
        Self {
            report_flow,
            begin_query,
            complete_query,
        }
    }
}

impl TunnelListener for TelemetryListener {
    type Token = QueryToken;

    fn on_flow_closed(&self, summary: FlowSummary) {
        self.report_flow.execute(summary);
    }

    fn on_query_start(&self, url: &str) -> QueryToken {
        self.begin_query.execute(url)
    }

    fn on_query_complete(&self, token: Option<QueryToken>, summary: &DohSummary) {
        self.complete_query.execute(token, summary);
    }
}
