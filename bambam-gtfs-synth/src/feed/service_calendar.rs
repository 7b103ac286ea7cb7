use chrono::NaiveDate;
use serde::Serialize;

use crate::feed::gtfs_codec::serialize_gtfs_date;

/// a row of calendar.txt. weekday fields are 1 when service runs on that day.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ServiceCalendar {
    pub service_id: String,
    pub monday: u8,
    pub tuesday: u8,
    pub wednesday: u8,
    pub thursday: u8,
    pub friday: u8,
    pub saturday: u8,
    pub sunday: u8,
    #[serde(serialize_with = "serialize_gtfs_date")]
    pub start_date: NaiveDate,
    #[serde(serialize_with = "serialize_gtfs_date")]
    pub end_date: NaiveDate,
}

impl ServiceCalendar {
    /// a service active on every day of the week between two dates (inclusive).
    pub fn every_day(service_id: &str, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            service_id: service_id.to_string(),
            monday: 1,
            tuesday: 1,
            wednesday: 1,
            thursday: 1,
            friday: 1,
            saturday: 1,
            sunday: 1,
            start_date,
            end_date,
        }
    }
}
