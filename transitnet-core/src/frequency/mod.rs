mod frequency_error;
mod frequency_ops;
mod frequency_outcomes;
mod frequency_recommendation;
mod headway_policy;

pub use frequency_error::FrequencyError;
pub use frequency_ops::{optimize, recommend};
pub use frequency_outcomes::FrequencyOutcomes;
pub use frequency_recommendation::FrequencyRecommendation;
pub use headway_policy::HeadwayPolicy;
