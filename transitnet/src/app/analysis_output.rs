use transitnet_core::{
    connectivity::ConnectivityReport,
    frequency::FrequencyOutcomes,
    graph::GraphBuild,
    model::ScheduleModel,
    service::{Coverage, ServiceFrequency},
};

/// everything produced by one analysis run over a schedule.
#[derive(Debug, Clone)]
pub struct AnalysisOutput {
    pub schedule: ScheduleModel,
    pub graph_build: GraphBuild,
    pub connectivity: ConnectivityReport,
    pub frequency: FrequencyOutcomes,
    pub service_frequency: Vec<ServiceFrequency>,
    pub coverage: Option<Coverage>,
}
