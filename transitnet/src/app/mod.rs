mod analysis_ops;
mod analysis_output;
mod operation;
mod transitnet_app;

pub use analysis_ops::run_analysis;
pub use analysis_output::AnalysisOutput;
pub use operation::TransitNetOperation;
pub use transitnet_app::TransitNetApp;
