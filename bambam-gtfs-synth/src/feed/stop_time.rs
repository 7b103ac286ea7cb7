use serde::Serialize;

use crate::feed::gtfs_codec::serialize_gtfs_time;

/// a timed visit of a trip to a stop. times are offsets in seconds from the
/// trip's first departure; frequencies.txt shifts them to real clock times.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct StopTime {
    pub trip_id: String,
    #[serde(serialize_with = "serialize_gtfs_time")]
    pub arrival_time: u32,
    #[serde(serialize_with = "serialize_gtfs_time")]
    pub departure_time: u32,
    pub stop_id: String,
    pub stop_sequence: u32,
}
