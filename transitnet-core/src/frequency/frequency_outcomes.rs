use super::{FrequencyError, FrequencyRecommendation};

/// per-route results of [`super::optimize`], in the order routes were provided.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrequencyOutcomes(pub Vec<Result<FrequencyRecommendation, FrequencyError>>);

impl FrequencyOutcomes {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn recommendations(&self) -> Vec<&FrequencyRecommendation> {
        self.0.iter().filter_map(|r| r.as_ref().ok()).collect()
    }

    pub fn failures(&self) -> Vec<&FrequencyError> {
        self.0.iter().filter_map(|r| r.as_ref().err()).collect()
    }

    pub fn n_succeeded(&self) -> usize {
        self.0.iter().filter(|r| r.is_ok()).count()
    }

    /// e.g. "computed for 4 of 5 routes"
    pub fn summary(&self) -> String {
        format!("computed for {} of {} routes", self.n_succeeded(), self.len())
    }
}
