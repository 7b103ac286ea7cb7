use serde::{Deserialize, Serialize};

/// a synthesized route, one per processed feature.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Route {
    pub route_id: String,
    pub agency_id: String,
    pub route_short_name: String,
    /// GTFS route_type code, e.g. 3 for bus.
    pub route_type: i32,
}
