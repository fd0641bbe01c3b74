use super::{Repositories, TelemetryServices};
use ferrous_tunnel_application::services::{StatusTaxonomy, TransactionBuilder};
use ferrous_tunnel_application::use_cases::{
    BeginQueryUseCase, CompleteQueryUseCase, ReportFlowUseCase,
};
use ferrous_tunnel_infrastructure::dns::HickoryQueryParser;
use ferrous_tunnel_infrastructure::tunnel::TelemetryListener;
use std::sync::Arc;

pub struct UseCases {
    pub report_flow: ReportFlowUseCase,
    pub begin_query: BeginQueryUseCase,
    pub complete_query: CompleteQueryUseCase,
}

impl UseCases {
    pub fn new(telemetry: &mut TelemetryServices, repos: &Repositories) -> Self {
        let (sink, http_metrics) = telemetry.take_producers();
        let taxonomy = Arc::new(StatusTaxonomy::new());

        Self {
            report_flow: ReportFlowUseCase::new(sink),
            begin_query: BeginQueryUseCase::new(http_metrics),
            complete_query: CompleteQueryUseCase::new(
                Arc::new(HickoryQueryParser::new()),
                TransactionBuilder::new(taxonomy),
                repos.history.clone(),
            ),
        }
    }

    pub fn into_listener(self) -> TelemetryListener {
        TelemetryListener::new(self.report_flow, self.begin_query, self.complete_query)
    }
}
