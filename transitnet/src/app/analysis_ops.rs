use super::AnalysisOutput;
use crate::{config::AnalysisConfiguration, TransitNetCliError};
use transitnet_core::{
    connectivity::{self, ConnectivityReport},
    frequency::{self, FrequencyOutcomes},
    graph::{self, GraphBuild},
    model::ScheduleModel,
    service::{analyze_service_frequency, calculate_coverage, Coverage, ServiceFrequency},
};

/// runs the connectivity pipeline (graph build, then connectivity analysis) and the
/// frequency pipeline (optimization plus observed service statistics) over a schedule.
/// the two pipelines share nothing but the schedule and run on separate rayon workers
/// when `parallelize` is set.
pub fn run_analysis(
    schedule: ScheduleModel,
    conf: &AnalysisConfiguration,
) -> Result<AnalysisOutput, TransitNetCliError> {
    let connectivity_pipeline = || -> Result<(GraphBuild, ConnectivityReport), TransitNetCliError> {
        let graph_build = graph::build(&schedule, &conf.distance_calculation_policy)?;
        let report = connectivity::analyze(&graph_build.graph, &conf.connectivity_config())?;
        Ok((graph_build, report))
    };
    let frequency_pipeline =
        || -> (FrequencyOutcomes, Vec<ServiceFrequency>, Option<Coverage>) {
            let outcomes = frequency::optimize(
                schedule.routes().values(),
                schedule.stops(),
                &conf.headway_policy,
            );
            let service_frequency = analyze_service_frequency(&schedule);
            let coverage = calculate_coverage(schedule.stops());
            (outcomes, service_frequency, coverage)
        };

    let (connectivity_result, (frequency, service_frequency, coverage)) = if conf.parallelize {
        rayon::join(connectivity_pipeline, frequency_pipeline)
    } else {
        (connectivity_pipeline(), frequency_pipeline())
    };
    let (graph_build, connectivity) = connectivity_result?;

    Ok(AnalysisOutput {
        schedule,
        graph_build,
        connectivity,
        frequency,
        service_frequency,
        coverage,
    })
}
