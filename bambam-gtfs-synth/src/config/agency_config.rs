use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct AgencyConfig {
    pub name: String,
    pub url: String,
    /// IANA timezone name, e.g. "America/Denver"
    pub timezone: String,
}
