use std::fmt::Display;

use crate::feed::{Agency, Frequency, Route, ServiceCalendar, Stop, StopTime, Trip};

/// the result of a synthesis run: every feed entity, in insertion order,
/// cross-referenced by id and ready to be written as GTFS.
#[derive(Debug, Clone, Default)]
pub struct SyntheticFeed {
    pub agencies: Vec<Agency>,
    pub calendars: Vec<ServiceCalendar>,
    pub routes: Vec<Route>,
    pub stops: Vec<Stop>,
    pub trips: Vec<Trip>,
    pub stop_times: Vec<StopTime>,
    pub frequencies: Vec<Frequency>,
}

impl SyntheticFeed {
    /// create an empty feed.
    pub fn empty() -> Self {
        Self::default()
    }

    /// true if no trips were synthesized.
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// moves all entities of `other` onto the end of this feed.
    pub fn append(&mut self, mut other: SyntheticFeed) {
        self.agencies.append(&mut other.agencies);
        self.calendars.append(&mut other.calendars);
        self.routes.append(&mut other.routes);
        self.stops.append(&mut other.stops);
        self.trips.append(&mut other.trips);
        self.stop_times.append(&mut other.stop_times);
        self.frequencies.append(&mut other.frequencies);
    }
}

impl Display for SyntheticFeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} routes, {} stops, {} trips, {} stop times, {} frequencies",
            self.routes.len(),
            self.stops.len(),
            self.trips.len(),
            self.stop_times.len(),
            self.frequencies.len()
        )
    }
}
