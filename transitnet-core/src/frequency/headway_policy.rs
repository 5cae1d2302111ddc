use serde::{Deserialize, Serialize};

/// parameters of the demand-driven headway heuristic. the defaults give one
/// scheduled vehicle slot per 1000 daily boardings, bounded to a 3 to 20 minute
/// band, over a 16 hour operating day.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct HeadwayPolicy {
    pub passengers_per_slot: f64,
    pub min_headway_minutes: u32,
    pub max_headway_minutes: u32,
    pub operating_hours: f64,
}

impl Default for HeadwayPolicy {
    fn default() -> Self {
        Self {
            passengers_per_slot: 1000.0,
            min_headway_minutes: 3,
            max_headway_minutes: 20,
            operating_hours: 16.0,
        }
    }
}

impl HeadwayPolicy {
    /// headway in minutes for an average daily demand, clamped to the policy band.
    pub fn recommend_headway(&self, avg_demand: f64) -> u32 {
        let slots = (avg_demand / self.passengers_per_slot).round();
        let lo = self.min_headway_minutes as f64;
        let hi = self.max_headway_minutes.max(self.min_headway_minutes) as f64;
        if slots.is_nan() {
            return self.min_headway_minutes;
        }
        slots.clamp(lo, hi) as u32
    }

    /// passengers carried in an operating day when vehicles run every `headway_minutes`.
    pub fn capacity_per_day(&self, vehicle_capacity: f64, headway_minutes: f64) -> f64 {
        vehicle_capacity * (60.0 / headway_minutes) * self.operating_hours
    }
}
