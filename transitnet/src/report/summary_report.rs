use super::generate_insights;
use crate::app::AnalysisOutput;

const BANNER_WIDTH: usize = 60;

/// human-readable summary of an analysis run.
pub fn summary_report(output: &AnalysisOutput) -> String {
    let banner = "=".repeat(BANNER_WIDTH);
    let schedule = &output.schedule;
    let mut report = vec![
        banner.clone(),
        String::from("TRANSIT NETWORK ANALYSIS REPORT"),
        banner.clone(),
        String::new(),
        String::from("BASIC STATISTICS:"),
        format!("- Total stops: {}", schedule.stops().len()),
        format!("- Total routes: {}", schedule.routes().len()),
        format!("- Total trips: {}", schedule.trips().len()),
        format!("- Transport agencies: {}", schedule.n_agencies()),
        String::new(),
    ];

    let sf = &output.service_frequency;
    if !sf.is_empty() {
        let avg = sf.iter().map(|s| s.avg_headway_minutes).sum::<f64>() / sf.len() as f64;
        report.push(String::from("SERVICE FREQUENCY ANALYSIS:"));
        report.push(format!("- Average service frequency: {avg:.1} minutes"));
        let most = sf
            .iter()
            .min_by(|a, b| a.avg_headway_minutes.total_cmp(&b.avg_headway_minutes));
        let least = sf
            .iter()
            .min_by(|a, b| b.avg_headway_minutes.total_cmp(&a.avg_headway_minutes));
        if let (Some(most), Some(least)) = (most, least) {
            report.push(format!("- Most frequent route: {}", most.route_id));
            report.push(format!("- Least frequent route: {}", least.route_id));
        }
        report.push(String::new());
    }

    if let Some(coverage) = &output.coverage {
        report.push(String::from("GEOGRAPHIC COVERAGE:"));
        report.push(format!(
            "- Coverage area: {:.1} km²",
            coverage.coverage_area_km2
        ));
        report.push(format!(
            "- Network center: ({:.4}, {:.4})",
            coverage.center_lat, coverage.center_lon
        ));
        report.push(String::new());
    }

    let connectivity = &output.connectivity;
    report.push(String::from("NETWORK CONNECTIVITY:"));
    report.push(format!(
        "- Network connectivity: {}",
        if connectivity.is_connected {
            "Connected"
        } else {
            "Disconnected"
        }
    ));
    report.push(format!(
        "- Average connections per stop: {:.1}",
        connectivity.average_degree
    ));
    report.push(format!("- Network density: {:.3}", connectivity.density));
    if let Some(top) = connectivity.most_connected_stops.first() {
        report.push(format!("- Most connected stop: {}", top.stop_id));
    }
    if let Some(top) = connectivity.most_important_stops.first() {
        report.push(format!("- Most important stop: {}", top.stop_id));
    }
    report.push(String::new());

    report.push(String::from("FREQUENCY OPTIMIZATION:"));
    report.push(format!(
        "- Recommendations {}",
        output.frequency.summary()
    ));
    for failure in output.frequency.failures() {
        report.push(format!("- Skipped: {failure}"));
    }
    report.push(String::new());

    let build = &output.graph_build;
    report.push(String::from("GRAPH CONSTRUCTION:"));
    report.push(format!(
        "- Trips used: {} of {}",
        build.n_used_trips(),
        build.n_trips
    ));
    report.push(format!("- Malformed trips skipped: {}", build.n_skipped_trips()));
    report.push(format!(
        "- Self-loops rejected: {}",
        build.rejected_self_loops
    ));
    report.push(format!("- Repeated hops merged: {}", build.merged_hops));
    report.push(String::new());

    let insights = generate_insights(&output.frequency);
    if !insights.is_empty() {
        report.push(String::from("INSIGHTS:"));
        for insight in insights.iter() {
            report.push(format!("- [{}] {}", insight.category, insight.insight));
            report.push(format!("  action: {}", insight.action));
        }
        report.push(String::new());
    }

    report.push(banner);
    report.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{app::run_analysis, config::AnalysisConfiguration, sample::sample_schedule};

    #[test]
    fn test_sample_summary() {
        let output =
            run_analysis(sample_schedule().unwrap(), &AnalysisConfiguration::default()).unwrap();
        let report = summary_report(&output);
        let lines = report.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "=".repeat(60));
        assert_eq!(lines.last().copied(), Some("=".repeat(60).as_str()));
        assert!(lines.contains(&"- Total stops: 10"));
        assert!(lines.contains(&"- Total trips: 25"));
        assert!(lines.contains(&"- Transport agencies: 2"));
        assert!(lines.contains(&"- Average service frequency: 60.0 minutes"));
        // all routes tie at 60 minutes, the first in schedule order is reported
        assert!(lines.contains(&"- Most frequent route: R001"));
        assert!(lines.contains(&"- Least frequent route: R001"));
        assert!(lines.contains(&"- Network connectivity: Disconnected"));
        assert!(lines.contains(&"- Average connections per stop: 1.0"));
        assert!(lines.contains(&"- Recommendations computed for 5 of 5 routes"));
        assert!(lines.contains(&"- Malformed trips skipped: 0"));
        // five trips per route over the same terminal pair: four merges each
        assert!(lines.contains(&"- Repeated hops merged: 20"));
    }
}
