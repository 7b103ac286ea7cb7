use geo::Coord;
use serde::{Deserialize, Serialize};
use uom::si::f64::Length;

/// a proposed stop location along one line part, prior to becoming a feed [`crate::feed::Stop`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CandidateStop {
    /// stop location in the coordinate space of the source geometry.
    pub coord: Coord<f64>,
    /// distance from the start of the line part to this stop.
    pub dist: Length,
    /// route this candidate was generated for.
    pub route_id: String,
}
