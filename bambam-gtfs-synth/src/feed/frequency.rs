use serde::Serialize;

use crate::feed::gtfs_codec::serialize_gtfs_time;

/// headway-based service for a trip over one time window.
/// see [https://gtfs.org/documentation/schedule/reference/#frequenciestxt].
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Frequency {
    pub trip_id: String,
    /// seconds from midnight
    #[serde(serialize_with = "serialize_gtfs_time")]
    pub start_time: u32,
    /// seconds from midnight
    #[serde(serialize_with = "serialize_gtfs_time")]
    pub end_time: u32,
    pub headway_secs: u32,
}
