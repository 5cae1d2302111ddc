use super::run_analysis;
use crate::{
    config::AnalysisConfiguration,
    gtfs::{read_schedule, write_schedule},
    report::{summary_report, ReportWriter},
    sample::sample_schedule,
    TransitNetCliError,
};
use clap::Subcommand;
use std::path::Path;

#[derive(Debug, Clone, Subcommand)]
pub enum TransitNetOperation {
    /// build the transit graph, analyze connectivity and recommend route headways
    Analyze {
        /// directory containing stops.txt, routes.txt, trips.txt and stop_times.txt
        #[arg(long)]
        gtfs_directory: String,
        /// output path for report files
        #[arg(long)]
        output_directory: String,
        /// path to .toml or .json file with analysis parameters
        #[arg(long)]
        configuration_file: Option<String>,
    },
    /// write the built-in sample network as a schedule directory
    Sample {
        #[arg(long)]
        output_directory: String,
    },
}

impl TransitNetOperation {
    pub fn run(&self) -> Result<(), TransitNetCliError> {
        match self {
            TransitNetOperation::Analyze {
                gtfs_directory,
                output_directory,
                configuration_file,
            } => {
                let conf = match configuration_file {
                    None => Ok(AnalysisConfiguration::default()),
                    Some(f) => {
                        log::info!("reading transitnet configuration from {f}");
                        AnalysisConfiguration::try_from(f)
                    }
                }?;
                let schedule = read_schedule(Path::new(gtfs_directory), &conf)?;
                let output = run_analysis(schedule, &conf)?;
                println!("{}", summary_report(&output));
                output.write_reports(Path::new(output_directory), conf.overwrite, conf.compress)?;
                eprintln!("finished.");
                Ok(())
            }
            TransitNetOperation::Sample { output_directory } => {
                let schedule = sample_schedule()?;
                write_schedule(&schedule, Path::new(output_directory), true)?;
                eprintln!("finished.");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::filenames;

    #[test]
    fn test_sample_then_analyze() {
        let root = std::env::temp_dir().join("transitnet_operation_tests");
        let feed = root.join("feed");
        let out = root.join("out");
        let _ = std::fs::remove_dir_all(&out);

        TransitNetOperation::Sample {
            output_directory: feed.to_string_lossy().to_string(),
        }
        .run()
        .unwrap();
        TransitNetOperation::Analyze {
            gtfs_directory: feed.to_string_lossy().to_string(),
            output_directory: out.to_string_lossy().to_string(),
            configuration_file: None,
        }
        .run()
        .unwrap();

        let freq = std::fs::read_to_string(out.join(filenames::FREQUENCY_OPTIMIZATION)).unwrap();
        let mut lines = freq.lines();
        assert_eq!(
            lines.next(),
            Some("route_id,route_name,current_frequency,optimal_frequency,current_utilization,optimal_utilization,efficiency_gain")
        );
        assert_eq!(
            lines.next(),
            Some("R001,Circle-Kaneshie,5,14,87.9,246.1,158.2")
        );
        assert!(out.join(filenames::SUMMARY).exists());
    }

    #[test]
    fn test_analyze_missing_directory() {
        let result = TransitNetOperation::Analyze {
            gtfs_directory: String::from("/nonexistent/transitnet/feed"),
            output_directory: std::env::temp_dir().to_string_lossy().to_string(),
            configuration_file: None,
        }
        .run();
        assert!(matches!(result, Err(TransitNetCliError::CsvReadError(_, _))));
    }
}
