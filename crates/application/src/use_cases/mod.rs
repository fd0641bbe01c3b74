pub mod flows;
pub mod queries;

// Re-export use cases
pub use flows::{ReportFlowUseCase, UDP_THRESHOLD_BYTES};
pub use queries::{BeginQueryUseCase, CompleteQueryUseCase, QueryToken};
