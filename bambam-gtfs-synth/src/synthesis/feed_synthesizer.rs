use std::collections::HashSet;

use uom::si::{
    f64::{Length, Velocity},
    length::meter,
    velocity::meter_per_second,
};

use crate::{
    config::SynthesisConfiguration,
    feature::SynthesisFeature,
    feed::{Agency, Route, ServiceCalendar, Stop, SyntheticFeed},
    synthesis::{
        stop_placement, trip_assembly, CandidateStop, IdGenerator, MultiLinePolicy,
        SynthesisError, TripAssemblyParameters, TripDirection,
    },
};

/// id of the single agency operating every route.
pub const AGENCY_ID: &str = "0";
/// id of the single service calendar used by every trip.
pub const SERVICE_ID: &str = "0";

/// builds a [`SyntheticFeed`] from features, one at a time and in order.
///
/// each call to [`FeedSynthesizer::add_feature`] produces the feature's route,
/// its stops, and a forward trip (plus a reverse trip when bidirectional) for
/// every line part. entities are staged per feature and only land in the feed
/// once the whole feature has succeeded.
pub struct FeedSynthesizer<'a> {
    conf: &'a SynthesisConfiguration,
    ids: IdGenerator,
    route_ids: HashSet<String>,
    feed: SyntheticFeed,
}

impl<'a> FeedSynthesizer<'a> {
    /// starts a feed holding the agency and the every-day service calendar.
    pub fn new(conf: &'a SynthesisConfiguration) -> Self {
        let mut feed = SyntheticFeed::empty();
        feed.agencies.push(Agency {
            agency_id: AGENCY_ID.to_string(),
            agency_name: conf.agency.name.clone(),
            agency_url: conf.agency.url.clone(),
            agency_timezone: conf.agency.timezone.clone(),
        });
        feed.calendars.push(ServiceCalendar::every_day(
            SERVICE_ID,
            conf.start_date,
            conf.end_date,
        ));
        Self {
            conf,
            ids: IdGenerator::new(),
            route_ids: HashSet::new(),
            feed,
        }
    }

    /// synthesizes the route, stops, trips, stop times and frequencies of a feature.
    /// errors name the offending route (or the feature label if the route id
    /// could not be read).
    pub fn add_feature<F: SynthesisFeature + ?Sized>(
        &mut self,
        feature: &F,
    ) -> Result<(), SynthesisError> {
        let route_id = self
            .route_id(feature)
            .map_err(|e| e.for_route(feature.label()))?;
        if self.route_ids.contains(&route_id) {
            return Err(SynthesisError::DuplicateRouteId(route_id.clone()).for_route(&route_id));
        }

        let mut ids = self.ids.clone();
        let staged = self
            .stage_feature(feature, &route_id, &mut ids)
            .map_err(|e| e.for_route(&route_id))?;

        self.ids = ids;
        self.route_ids.insert(route_id);
        self.feed.append(staged);
        Ok(())
    }

    /// places the candidate stops of a feature without building any feed
    /// entities, returning the route id along with one stop sequence per part.
    pub fn place_feature_stops<F: SynthesisFeature + ?Sized>(
        &self,
        feature: &F,
    ) -> Result<(String, Vec<Vec<CandidateStop>>), SynthesisError> {
        let route_id = self
            .route_id(feature)
            .map_err(|e| e.for_route(feature.label()))?;
        let parts = self
            .conf
            .spacing
            .resolve(feature)
            .and_then(|spacing| {
                self.candidate_stops(feature, &route_id, Length::new::<meter>(spacing))
            })
            .map_err(|e| e.for_route(&route_id))?;
        Ok((route_id, parts))
    }

    /// number of routes synthesized so far.
    pub fn route_count(&self) -> usize {
        self.route_ids.len()
    }

    pub fn finish(self) -> SyntheticFeed {
        self.feed
    }

    fn route_id<F: SynthesisFeature + ?Sized>(&self, feature: &F) -> Result<String, SynthesisError> {
        let key = &self.conf.route_id_attribute;
        feature
            .get_attribute(key)
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(String::from)
            .ok_or_else(|| SynthesisError::MissingAttribute(key.clone()))
    }

    fn candidate_stops<F: SynthesisFeature + ?Sized>(
        &self,
        feature: &F,
        route_id: &str,
        spacing: Length,
    ) -> Result<Vec<Vec<CandidateStop>>, SynthesisError> {
        let geometry = feature.geometry();
        match (geometry.0.len(), self.conf.multi_line_policy) {
            (0, _) => return Err(SynthesisError::EmptyGeometry),
            (1, _) => {}
            (n, MultiLinePolicy::Fail) => return Err(SynthesisError::MultiPartGeometry(n)),
            (n, MultiLinePolicy::SplitParts) => {
                log::info!("route {route_id} has {n} parts, each receives its own stops and trips")
            }
        }
        stop_placement::place_stops_on_parts(
            geometry,
            spacing,
            route_id,
            &self.conf.distance_calculation_policy,
        )
    }

    fn stage_feature<F: SynthesisFeature + ?Sized>(
        &self,
        feature: &F,
        route_id: &str,
        ids: &mut IdGenerator,
    ) -> Result<SyntheticFeed, SynthesisError> {
        let conf = self.conf;
        let route_name = match feature.get_attribute(&conf.route_name_attribute) {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            _ => {
                log::warn!(
                    "route {route_id} has no '{}' attribute, using the route id as its name",
                    conf.route_name_attribute
                );
                route_id.to_string()
            }
        };
        log::debug!("generating stops for {route_name}");

        // configured spacing is in meters and speed in meters per second
        let route_type = conf.mode.resolve(feature)?;
        let spacing = Length::new::<meter>(conf.spacing.resolve(feature)?);
        let speed_mps = conf.speed.resolve(feature)?;
        if !(speed_mps.is_finite() && speed_mps > 0.0) {
            return Err(SynthesisError::InvalidSpeed(speed_mps));
        }
        let speed = Velocity::new::<meter_per_second>(speed_mps);
        let parts = self.candidate_stops(feature, route_id, spacing)?;

        let params = TripAssemblyParameters {
            service_id: SERVICE_ID,
            time_windows: &conf.time_windows,
            use_periods: conf.use_periods,
            wait_factor: conf.wait_factor,
        };
        let directions = if conf.bidirectional {
            vec![TripDirection::Forward, TripDirection::Reverse]
        } else {
            vec![TripDirection::Forward]
        };

        let mut staged = SyntheticFeed::empty();
        staged.routes.push(Route {
            route_id: route_id.to_string(),
            agency_id: AGENCY_ID.to_string(),
            route_short_name: route_name,
            route_type,
        });

        for candidates in parts.iter() {
            let stops = candidates
                .iter()
                .map(|candidate| {
                    let stop_id = ids.next_stop_id();
                    Stop {
                        stop_name: stop_id.clone(),
                        stop_id,
                        stop_lat: candidate.coord.y,
                        stop_lon: candidate.coord.x,
                    }
                })
                .collect::<Vec<_>>();

            for direction in directions.iter() {
                let assembled = trip_assembly::assemble_trip(
                    feature,
                    route_id,
                    ids.next_trip_id(),
                    candidates,
                    &stops,
                    speed,
                    *direction,
                    &params,
                )?;
                staged.trips.push(assembled.trip);
                staged.stop_times.extend(assembled.stop_times);
                staged.frequencies.extend(assembled.frequencies);
            }
            staged.stops.extend(stops);
        }
        Ok(staged)
    }
}
