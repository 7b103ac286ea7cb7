use serde::{Deserialize, Serialize};

/// latest hour a time window may reference. GTFS times past 24:00:00 describe
/// service continuing after midnight of the service day.
pub const MAX_SERVICE_HOUR: u32 = 48;

/// a band of hours in the service day along with the feature attribute that
/// holds the route's frequency value during that band.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TimeWindow {
    pub start_hour: u32,
    pub end_hour: u32,
    pub attribute: String,
}

impl TimeWindow {
    pub fn new(start_hour: u32, end_hour: u32, attribute: &str) -> Self {
        Self {
            start_hour,
            end_hour,
            attribute: attribute.to_string(),
        }
    }

    /// true if both hours are within [`MAX_SERVICE_HOUR`].
    pub fn is_within_service_day(&self) -> bool {
        self.start_hour <= MAX_SERVICE_HOUR && self.end_hour <= MAX_SERVICE_HOUR
    }

    /// window start in seconds from midnight
    pub fn start_time(&self) -> u32 {
        self.start_hour.saturating_mul(3600)
    }

    /// window end in seconds from midnight
    pub fn end_time(&self) -> u32 {
        self.end_hour.saturating_mul(3600)
    }
}
