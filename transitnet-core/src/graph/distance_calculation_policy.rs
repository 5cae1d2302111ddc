use geo::{Distance, Geodesic, Haversine, Point};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uom::si::f64::Length;

/// how the length of a hop between two stops is computed.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DistanceCalculationPolicy {
    /// geodesic distance on the WGS84 ellipsoid
    #[default]
    Geodesic,
    /// great-circle distance on a sphere of mean earth radius
    Haversine,
}

impl DistanceCalculationPolicy {
    pub fn distance(&self, src_point: Point<f64>, dst_point: Point<f64>) -> Length {
        let meters = match self {
            DistanceCalculationPolicy::Geodesic => Geodesic.distance(src_point, dst_point),
            DistanceCalculationPolicy::Haversine => Haversine.distance(src_point, dst_point),
        };
        Length::new::<uom::si::length::meter>(meters)
    }
}

impl Display for DistanceCalculationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DistanceCalculationPolicy::Geodesic => write!(f, "geodesic"),
            DistanceCalculationPolicy::Haversine => write!(f, "haversine"),
        }
    }
}
