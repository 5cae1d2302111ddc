//! descriptive statistics of the schedule itself, independent of the graph.
mod coverage;
mod service_frequency;

pub use coverage::{calculate_coverage, Coverage};
pub use service_frequency::{analyze_service_frequency, observed_headway_minutes, ServiceFrequency};
