use crate::model::{Stop, StopId};
use indexmap::IndexMap;
use itertools::{Itertools, MinMaxResult};
use serde::Serialize;

const KM_PER_DEGREE: f64 = 111.0;

/// geographic extent of the stop set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Coverage {
    pub total_stops: usize,
    pub latitude_range: f64,
    pub longitude_range: f64,
    pub center_lat: f64,
    pub center_lon: f64,
    /// bounding box area, approximated with a flat projection at the mean latitude
    pub coverage_area_km2: f64,
}

/// computes the bounding box coverage of a set of stops, or None if there are no stops.
pub fn calculate_coverage(stops: &IndexMap<StopId, Stop>) -> Option<Coverage> {
    let (min_lat, max_lat) = range(stops.values().map(|s| s.lat))?;
    let (min_lon, max_lon) = range(stops.values().map(|s| s.lon))?;
    let n = stops.len() as f64;
    let center_lat = stops.values().map(|s| s.lat).sum::<f64>() / n;
    let center_lon = stops.values().map(|s| s.lon).sum::<f64>() / n;
    let latitude_range = max_lat - min_lat;
    let longitude_range = max_lon - min_lon;
    let lat_km = latitude_range * KM_PER_DEGREE;
    let lon_km = longitude_range * KM_PER_DEGREE * center_lat.to_radians().cos();
    Some(Coverage {
        total_stops: stops.len(),
        latitude_range,
        longitude_range,
        center_lat,
        center_lon,
        coverage_area_km2: lat_km * lon_km,
    })
}

fn range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    match values.minmax_by(|a, b| a.total_cmp(b)) {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(v) => Some((v, v)),
        MinMaxResult::MinMax(lo, hi) => Some((lo, hi)),
    }
}
