use super::ModelError;
use serde::{Serialize, Serializer};
use std::{fmt::Display, str::FromStr};

/// a time of day on a service day, stored as seconds after midnight. following
/// GTFS convention, the hour component may exceed 23 for trips that run past midnight.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct ScheduleTime(pub u32);

impl ScheduleTime {
    pub fn from_hms(hours: u32, minutes: u32, seconds: u32) -> ScheduleTime {
        ScheduleTime(hours * 3600 + minutes * 60 + seconds)
    }

    pub fn seconds(&self) -> u32 {
        self.0
    }

    /// offsets this time by a number of whole minutes.
    pub fn plus_minutes(&self, minutes: u32) -> ScheduleTime {
        ScheduleTime(self.0 + minutes * 60)
    }

    /// formats as `HH:MM`, dropping seconds.
    pub fn to_hhmm(&self) -> String {
        let hours = self.0 / 3600;
        let minutes = (self.0 % 3600) / 60;
        format!("{hours:02}:{minutes:02}")
    }
}

impl Display for ScheduleTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hours = self.0 / 3600;
        let minutes = (self.0 % 3600) / 60;
        let seconds = self.0 % 60;
        write!(f, "{hours:02}:{minutes:02}:{seconds:02}")
    }
}

impl FromStr for ScheduleTime {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |msg: &str| ModelError::InvalidScheduleTime(s.to_string(), msg.to_string());
        let parts = s.trim().split(':').collect::<Vec<_>>();
        let [h, m, sec] = parts.as_slice() else {
            return Err(invalid("expected format HH:MM:SS"));
        };
        let hours: u32 = h.parse().map_err(|_| invalid("hours is not a number"))?;
        let minutes: u32 = m.parse().map_err(|_| invalid("minutes is not a number"))?;
        let seconds: u32 = sec.parse().map_err(|_| invalid("seconds is not a number"))?;
        if minutes > 59 || seconds > 59 {
            return Err(invalid("minutes and seconds must be in [0, 59]"));
        }
        hours
            .checked_mul(3600)
            .and_then(|h| h.checked_add(minutes * 60 + seconds))
            .map(ScheduleTime)
            .ok_or_else(|| invalid("hours out of range"))
    }
}

impl Serialize for ScheduleTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
