use itertools::{Either, Itertools};
use uom::si::{
    f64::{Time, Velocity},
    time::second,
    velocity::meter_per_second,
};

use crate::{
    feature::FeatureAttributes,
    feed::{Frequency, Stop, StopTime, Trip},
    synthesis::{frequency_ops, CandidateStop, SynthesisError, TimeWindow},
};

/// order in which a trip visits the stops of a line part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripDirection {
    /// stops in the order they were placed along the line.
    Forward,
    /// the same stops, last to first.
    Reverse,
}

/// values shared by every trip assembled in a synthesis run.
#[derive(Debug, Clone)]
pub struct TripAssemblyParameters<'a> {
    pub service_id: &'a str,
    pub time_windows: &'a [TimeWindow],
    pub use_periods: bool,
    pub wait_factor: f64,
}

/// a trip along with the stop times and frequencies that belong to it.
#[derive(Debug, Clone)]
pub struct AssembledTrip {
    pub trip: Trip,
    pub stop_times: Vec<StopTime>,
    pub frequencies: Vec<Frequency>,
}

/// builds one trip over the stops of a line part.
///
/// `stops` holds the materialized stop of each candidate, index for index.
/// visit times are the distance from the first visited stop divided by `speed`,
/// truncated to whole seconds, with no dwell time.
/// one frequency is attached per time window whose attribute on `feature`
/// holds a usable value.
pub fn assemble_trip<F>(
    feature: &F,
    route_id: &str,
    trip_id: String,
    candidates: &[CandidateStop],
    stops: &[Stop],
    speed: Velocity,
    direction: TripDirection,
    params: &TripAssemblyParameters,
) -> Result<AssembledTrip, SynthesisError>
where
    F: FeatureAttributes + ?Sized,
{
    let speed_mps = speed.get::<meter_per_second>();
    if !(speed_mps.is_finite() && speed_mps > 0.0) {
        return Err(SynthesisError::InvalidSpeed(speed_mps));
    }
    if candidates.len() != stops.len() {
        return Err(SynthesisError::StopCandidateMismatch {
            candidates: candidates.len(),
            stops: stops.len(),
        });
    }

    let trip = Trip {
        route_id: route_id.to_string(),
        service_id: params.service_id.to_string(),
        trip_id,
    };

    let mut frequencies = vec![];
    for window in params.time_windows.iter() {
        let raw = feature.get_attribute(&window.attribute);
        match frequency_ops::make_frequency(
            &trip.trip_id,
            window,
            raw,
            params.use_periods,
            params.wait_factor,
        )? {
            Some(freq) => frequencies.push(freq),
            None => log::debug!(
                "route {route_id} trip {} has no service for window {}-{} (attribute '{}' is {:?})",
                trip.trip_id,
                window.start_hour,
                window.end_hour,
                window.attribute,
                raw
            ),
        }
    }

    let visits = candidates.iter().zip(stops.iter()).collect_vec();
    let ordered = match direction {
        TripDirection::Forward => Either::Left(visits.iter()),
        TripDirection::Reverse => Either::Right(visits.iter().rev()),
    };

    let mut stop_times = Vec::with_capacity(visits.len());
    let mut first_dist = None;
    for (seq, (candidate, stop)) in ordered.enumerate() {
        let origin = *first_dist.get_or_insert(candidate.dist);
        let travel_time: Time = (candidate.dist - origin).abs() / speed;
        let time = travel_time.get::<second>().floor() as u32;
        stop_times.push(StopTime {
            trip_id: trip.trip_id.clone(),
            arrival_time: time,
            departure_time: time,
            stop_id: stop.stop_id.clone(),
            stop_sequence: seq as u32,
        });
    }

    Ok(AssembledTrip {
        trip,
        stop_times,
        frequencies,
    })
}

#[cfg(test)]
mod tests {
    use super::{assemble_trip, TripAssemblyParameters, TripDirection};
    use crate::feature::GeometryFeature;
    use crate::feed::Stop;
    use crate::synthesis::{CandidateStop, SynthesisError, TimeWindow};
    use geo::{Coord, MultiLineString};
    use itertools::Itertools;
    use std::collections::HashMap;
    use uom::si::{
        f64::{Length, Velocity},
        length::meter,
        velocity::{kilometer_per_hour, meter_per_second},
    };

    fn mock_feature(attributes: &[(&str, &str)]) -> GeometryFeature {
        let attributes = attributes
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        GeometryFeature::new("test", MultiLineString::new(vec![]), attributes)
    }

    fn mock_stops(dists: &[f64]) -> (Vec<CandidateStop>, Vec<Stop>) {
        let candidates = dists
            .iter()
            .map(|d| CandidateStop {
                coord: Coord { x: *d, y: 0.0 },
                dist: Length::new::<meter>(*d),
                route_id: String::from("r"),
            })
            .collect_vec();
        let stops = dists
            .iter()
            .enumerate()
            .map(|(i, d)| Stop {
                stop_id: i.to_string(),
                stop_name: i.to_string(),
                stop_lat: 0.0,
                stop_lon: *d,
            })
            .collect_vec();
        (candidates, stops)
    }

    fn mps(value: f64) -> Velocity {
        Velocity::new::<meter_per_second>(value)
    }

    fn params(windows: &[TimeWindow]) -> TripAssemblyParameters<'_> {
        TripAssemblyParameters {
            service_id: "0",
            time_windows: windows,
            use_periods: false,
            wait_factor: 1.0,
        }
    }

    #[test]
    fn test_forward_and_reverse_offsets() {
        let feature = mock_feature(&[]);
        let (candidates, stops) = mock_stops(&[0.0, 300.0, 600.0, 900.0, 1000.0]);
        let p = params(&[]);
        let fwd = assemble_trip(
            &feature,
            "r",
            String::from("0"),
            &candidates,
            &stops,
            mps(10.0),
            TripDirection::Forward,
            &p,
        )
        .expect("should not fail");
        let rev = assemble_trip(
            &feature,
            "r",
            String::from("1"),
            &candidates,
            &stops,
            mps(10.0),
            TripDirection::Reverse,
            &p,
        )
        .expect("should not fail");

        let fwd_times = fwd.stop_times.iter().map(|st| st.arrival_time).collect_vec();
        assert_eq!(fwd_times, vec![0, 30, 60, 90, 100]);
        let rev_times = rev.stop_times.iter().map(|st| st.arrival_time).collect_vec();
        assert_eq!(rev_times, vec![0, 10, 40, 70, 100]);
        assert!(fwd
            .stop_times
            .iter()
            .chain(rev.stop_times.iter())
            .all(|st| st.arrival_time == st.departure_time));

        let fwd_stops = fwd.stop_times.iter().map(|st| st.stop_id.as_str()).collect_vec();
        let rev_stops = rev.stop_times.iter().map(|st| st.stop_id.as_str()).collect_vec();
        assert_eq!(fwd_stops, vec!["0", "1", "2", "3", "4"]);
        assert_eq!(rev_stops, vec!["4", "3", "2", "1", "0"]);

        for trip in [&fwd, &rev] {
            let seqs = trip.stop_times.iter().map(|st| st.stop_sequence).collect_vec();
            assert_eq!(seqs, vec![0, 1, 2, 3, 4]);
            assert!(trip.stop_times.iter().all(|st| st.trip_id == trip.trip.trip_id));
        }
        assert_eq!(fwd.trip.route_id, "r");
        assert_eq!(fwd.trip.service_id, "0");
        assert_eq!(rev.trip.trip_id, "1");
    }

    #[test]
    fn test_speed_units_are_converted() {
        // 36 km/h is 10 m/s
        let feature = mock_feature(&[]);
        let (candidates, stops) = mock_stops(&[0.0, 300.0, 600.0, 900.0, 1000.0]);
        let trip = assemble_trip(
            &feature,
            "r",
            String::from("0"),
            &candidates,
            &stops,
            Velocity::new::<kilometer_per_hour>(36.0),
            TripDirection::Forward,
            &params(&[]),
        )
        .expect("should not fail");
        let times = trip.stop_times.iter().map(|st| st.arrival_time).collect_vec();
        assert_eq!(times, vec![0, 30, 60, 90, 100]);
    }

    #[test]
    fn test_offsets_are_truncated() {
        let feature = mock_feature(&[]);
        let (candidates, stops) = mock_stops(&[0.0, 25.0, 49.0]);
        let trip = assemble_trip(
            &feature,
            "r",
            String::from("0"),
            &candidates,
            &stops,
            mps(10.0),
            TripDirection::Forward,
            &params(&[]),
        )
        .expect("should not fail");
        let times = trip.stop_times.iter().map(|st| st.arrival_time).collect_vec();
        assert_eq!(times, vec![0, 2, 4]);
    }

    #[test]
    fn test_frequency_per_window() {
        let feature = mock_feature(&[("peak", "10"), ("offpeak", "0"), ("night", "None")]);
        let (candidates, stops) = mock_stops(&[0.0, 100.0]);
        let windows = vec![
            TimeWindow::new(6, 9, "peak"),
            TimeWindow::new(9, 16, "offpeak"),
            TimeWindow::new(22, 26, "night"),
            TimeWindow::new(16, 19, "evening"),
        ];
        let trip = assemble_trip(
            &feature,
            "r",
            String::from("5"),
            &candidates,
            &stops,
            mps(10.0),
            TripDirection::Forward,
            &params(&windows),
        )
        .expect("should not fail");
        assert_eq!(trip.frequencies.len(), 1);
        let freq = &trip.frequencies[0];
        assert_eq!(freq.trip_id, "5");
        assert_eq!(freq.start_time, 6 * 3600);
        assert_eq!(freq.end_time, 9 * 3600);
        assert_eq!(freq.headway_secs, 360);
    }

    #[test]
    fn test_malformed_frequency_fails() {
        let feature = mock_feature(&[("peak", "often")]);
        let (candidates, stops) = mock_stops(&[0.0, 100.0]);
        let windows = vec![TimeWindow::new(6, 9, "peak")];
        let result = assemble_trip(
            &feature,
            "r",
            String::from("0"),
            &candidates,
            &stops,
            mps(10.0),
            TripDirection::Forward,
            &params(&windows),
        );
        match result {
            Err(SynthesisError::MalformedFrequency { .. }) => {}
            other => panic!("expected MalformedFrequency, found {other:?}"),
        }
    }

    #[test]
    fn test_invalid_speed() {
        let feature = mock_feature(&[]);
        let (candidates, stops) = mock_stops(&[0.0, 100.0]);
        for speed in [0.0, -1.0, f64::NAN] {
            let result = assemble_trip(
                &feature,
                "r",
                String::from("0"),
                &candidates,
                &stops,
                mps(speed),
                TripDirection::Forward,
                &params(&[]),
            );
            match result {
                Err(SynthesisError::InvalidSpeed(_)) => {}
                other => panic!("expected InvalidSpeed for {speed}, found {other:?}"),
            }
        }
    }

    #[test]
    fn test_mismatched_stops() {
        let feature = mock_feature(&[]);
        let (candidates, mut stops) = mock_stops(&[0.0, 100.0, 200.0]);
        stops.pop();
        let result = assemble_trip(
            &feature,
            "r",
            String::from("0"),
            &candidates,
            &stops,
            mps(10.0),
            TripDirection::Forward,
            &params(&[]),
        );
        match result {
            Err(SynthesisError::StopCandidateMismatch {
                candidates: 3,
                stops: 2,
            }) => {}
            other => panic!("expected StopCandidateMismatch, found {other:?}"),
        }
    }
}
