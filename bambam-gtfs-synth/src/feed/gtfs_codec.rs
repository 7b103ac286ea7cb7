//! serializers for the GTFS field formats written by this crate.
//! see [https://gtfs.org/documentation/schedule/reference/#field-types].
use chrono::NaiveDate;
use serde::Serializer;

pub const GTFS_DATE_FORMAT: &str = "%Y%m%d";

/// formats seconds past midnight as HH:MM:SS. hours are not wrapped at 24, as
/// GTFS allows service past midnight to be expressed as e.g. 25:10:00.
pub fn format_gtfs_time(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

pub fn serialize_gtfs_time<S>(seconds: &u32, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_gtfs_time(*seconds))
}

pub fn serialize_gtfs_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&date.format(GTFS_DATE_FORMAT).to_string())
}
