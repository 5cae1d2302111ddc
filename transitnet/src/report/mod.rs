//! text, JSON and CSV renderings of analysis results.
mod connectivity_text;
mod insights;
mod report_rows;
mod report_writer;
mod summary_report;

pub use connectivity_text::connectivity_lines;
pub use insights::{generate_insights, Insight};
pub use report_rows::{FrequencyOptimizationRow, GraphEdgeRow, ServiceFrequencyRow};
pub use report_writer::{filenames, ReportWriter};
pub use summary_report::summary_report;

pub(crate) use report_writer::{create_csv_writer, create_directory};
