use serde::{Deserialize, Serialize};

/// the single transit agency operating every synthesized route.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Agency {
    pub agency_id: String,
    pub agency_name: String,
    pub agency_url: String,
    pub agency_timezone: String,
}
