use serde::{Deserialize, Serialize};

/// a materialized stop. both directions of a route share the same stops.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Stop {
    pub stop_id: String,
    pub stop_name: String,
    pub stop_lat: f64,
    pub stop_lon: f64,
}
