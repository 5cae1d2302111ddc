//! Graph construction, connectivity analysis and service frequency optimization
//! over a fixed public transit schedule snapshot.
//!
//! Nothing in this crate performs I/O. A [`model::ScheduleModel`] is built by some
//! ingestion collaborator and then passed through the two independent pipelines:
//!
//! - [`graph::build`] followed by [`connectivity::analyze`]
//! - [`frequency::optimize`]
pub mod connectivity;
pub mod frequency;
pub mod graph;
pub mod model;
pub mod service;

#[cfg(test)]
pub(crate) mod test_fixtures;
