use geo::{LineString, MultiLineString};
use uom::si::{
    f64::{Length, Ratio},
    length::meter,
    ratio::ratio,
};

use crate::synthesis::{
    distance_calculation_policy::{interpolate, DistanceCalculationPolicy},
    CandidateStop, SynthesisError,
};

/// places candidate stops along each part of a (multi-part) geometry. parts are
/// walked independently, so each returned sequence starts over at distance 0.
pub fn place_stops_on_parts(
    geometry: &MultiLineString<f64>,
    spacing: Length,
    route_id: &str,
    distance_policy: &DistanceCalculationPolicy,
) -> Result<Vec<Vec<CandidateStop>>, SynthesisError> {
    geometry
        .iter()
        .map(|line| place_stops(line, spacing, route_id, distance_policy))
        .collect()
}

/// walks a line, emitting a candidate stop every `spacing`. the walk is
/// continuous across segment boundaries: whatever distance remains past the end
/// of one segment (the overshoot) is where the walk resumes on the next.
///
/// a final candidate is always placed at the last coordinate with the total line
/// length as its distance, even when the last regular candidate lies right next to it.
pub fn place_stops(
    line: &LineString<f64>,
    spacing: Length,
    route_id: &str,
    distance_policy: &DistanceCalculationPolicy,
) -> Result<Vec<CandidateStop>, SynthesisError> {
    let spacing_meters = spacing.get::<meter>();
    if !(spacing_meters.is_finite() && spacing_meters > 0.0) {
        return Err(SynthesisError::InvalidSpacing(spacing_meters));
    }
    let last = match line.0.as_slice() {
        [_, .., last] => *last,
        coords => return Err(SynthesisError::DegenerateLine(coords.len())),
    };

    let mut result = vec![];
    let zero = Length::new::<meter>(0.0);
    let mut overshoot = zero;
    let mut seg_start_dist = zero;
    let mut total_len = zero;
    for segment in line.lines() {
        let seg_len = distance_policy.distance(segment.start, segment.end);
        total_len += seg_len;

        // zero-length segments emit nothing and pass the overshoot through unchanged
        let mut cursor = overshoot;
        while cursor < seg_len {
            let fraction: Ratio = cursor / seg_len;
            result.push(CandidateStop {
                coord: interpolate(segment.start, segment.end, fraction.get::<ratio>()),
                dist: seg_start_dist + cursor,
                route_id: route_id.to_string(),
            });
            cursor += spacing;
        }

        overshoot = cursor - seg_len;
        seg_start_dist += seg_len;
    }

    result.push(CandidateStop {
        coord: last,
        dist: total_len,
        route_id: route_id.to_string(),
    });

    Ok(result)
}
