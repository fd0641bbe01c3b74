pub mod report_flow;

pub use report_flow::{ReportFlowUseCase, UDP_THRESHOLD_BYTES};
