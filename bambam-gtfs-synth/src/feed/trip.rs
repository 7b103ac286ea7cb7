use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Trip {
    pub route_id: String,
    pub service_id: String,
    pub trip_id: String,
}
