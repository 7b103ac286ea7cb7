use clap::ValueEnum;
use geo::{Coord, Distance, Euclidean, Haversine, Point};
use serde::{Deserialize, Serialize};
use uom::si::{f64::Length, length::meter};

/// how distances between consecutive line coordinates are measured.
#[derive(Serialize, Deserialize, Debug, ValueEnum, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DistanceCalculationPolicy {
    /// great-circle distance over (longitude, latitude) coordinates.
    #[default]
    Haversine,
    /// planar distance over projected coordinates in meter units.
    Euclidean,
}

impl DistanceCalculationPolicy {
    pub fn distance(&self, src: Coord<f64>, dst: Coord<f64>) -> Length {
        let (src, dst) = (Point::from(src), Point::from(dst));
        let meters = match self {
            DistanceCalculationPolicy::Haversine => Haversine.distance(src, dst),
            DistanceCalculationPolicy::Euclidean => Euclidean.distance(src, dst),
        };
        Length::new::<meter>(meters)
    }
}

/// linear interpolation in coordinate space (no geodesic correction) between
/// `src` and `dst` at `fraction` of the segment, where 0 is `src` and 1 is `dst`.
pub fn interpolate(src: Coord<f64>, dst: Coord<f64>, fraction: f64) -> Coord<f64> {
    Coord {
        x: src.x + (dst.x - src.x) * fraction,
        y: src.y + (dst.y - src.y) * fraction,
    }
}
