use super::{ModelError, StopId};
use geo::Point;
use serde::{Deserialize, Serialize};

/// a fixed physical transit location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub stop_id: StopId,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub zone_id: Option<String>,
    /// observed daily boardings at this stop, used as the demand figure
    /// when recommending route headways.
    pub daily_passengers: u64,
}

impl Stop {
    /// creates a stop with no zone and zero observed demand. fails if the
    /// coordinate is not a valid WGS84 latitude/longitude.
    pub fn new(stop_id: StopId, name: &str, lat: f64, lon: f64) -> Result<Stop, ModelError> {
        let stop = Stop {
            stop_id,
            name: name.to_string(),
            lat,
            lon,
            zone_id: None,
            daily_passengers: 0,
        };
        stop.validate()?;
        Ok(stop)
    }

    pub fn with_zone(mut self, zone_id: &str) -> Stop {
        self.zone_id = Some(zone_id.to_string());
        self
    }

    pub fn with_daily_passengers(mut self, daily_passengers: u64) -> Stop {
        self.daily_passengers = daily_passengers;
        self
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(ModelError::InvalidLatitude(self.stop_id.clone(), self.lat));
        }
        if !(-180.0..=180.0).contains(&self.lon) {
            return Err(ModelError::InvalidLongitude(self.stop_id.clone(), self.lon));
        }
        Ok(())
    }

    /// location of this stop as an (x=lon, y=lat) point.
    pub fn point(&self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_out_of_range_coordinates() {
        let lat = Stop::new(StopId::from("S1"), "bad lat", 91.0, 0.0);
        assert!(matches!(lat, Err(ModelError::InvalidLatitude(_, _))));
        let lon = Stop::new(StopId::from("S1"), "bad lon", 0.0, -180.5);
        assert!(matches!(lon, Err(ModelError::InvalidLongitude(_, _))));
        let nan = Stop::new(StopId::from("S1"), "nan", f64::NAN, 0.0);
        assert!(nan.is_err());
    }

    #[test]
    fn test_point_is_lon_lat() {
        let stop = Stop::new(StopId::from("S1"), "circle", 5.56, -0.2).unwrap();
        assert_eq!(stop.point().x(), -0.2);
        assert_eq!(stop.point().y(), 5.56);
    }
}
