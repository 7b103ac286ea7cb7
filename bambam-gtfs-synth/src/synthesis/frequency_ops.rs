use crate::{
    feed::Frequency,
    synthesis::{SynthesisError, TimeWindow},
};

/// attribute value denoting that a route has no frequency value for a window.
pub const NO_VALUE_SENTINEL: &str = "None";

/// converts a raw frequency attribute into a headway in seconds.
///
/// with `use_periods`, the value is minutes between departures, otherwise it is
/// arrivals per hour. the headway is then divided by `wait_factor` and truncated
/// to whole seconds.
///
/// returns `None` when the window has no service: the value is absent, is the
/// [`NO_VALUE_SENTINEL`], or is zero. values that are not numbers, or are
/// negative or non-finite, are an error, as is a headway that truncates below
/// one second: GTFS requires `headway_secs` to be a positive integer.
pub fn headway_seconds(
    attribute: &str,
    raw: Option<&str>,
    use_periods: bool,
    wait_factor: f64,
) -> Result<Option<u32>, SynthesisError> {
    if !(wait_factor.is_finite() && wait_factor > 0.0) {
        return Err(SynthesisError::InvalidWaitFactor(wait_factor));
    }
    let raw = match raw.map(str::trim) {
        None => return Ok(None),
        Some(NO_VALUE_SENTINEL) => return Ok(None),
        Some(r) => r,
    };
    let malformed = || SynthesisError::MalformedFrequency {
        attribute: attribute.to_string(),
        value: raw.to_string(),
    };
    let value: f64 = raw.parse().map_err(|_| malformed())?;
    if !value.is_finite() || value < 0.0 {
        return Err(malformed());
    }
    if value == 0.0 {
        return Ok(None);
    }

    let headway = if use_periods {
        // minutes to seconds
        value * 60.0
    } else {
        // arrivals per hour
        3600.0 / value
    };
    let scaled = (headway / wait_factor).trunc();
    if scaled < 1.0 {
        return Err(SynthesisError::ZeroHeadway {
            attribute: attribute.to_string(),
            value: raw.to_string(),
        });
    }
    Ok(Some(scaled.min(u32::MAX as f64) as u32))
}

/// builds the [`Frequency`] of a trip over one time window, or `None` if the
/// window has no service. see [`headway_seconds`].
pub fn make_frequency(
    trip_id: &str,
    window: &TimeWindow,
    raw: Option<&str>,
    use_periods: bool,
    wait_factor: f64,
) -> Result<Option<Frequency>, SynthesisError> {
    let headway = headway_seconds(&window.attribute, raw, use_periods, wait_factor)?;
    Ok(headway.map(|headway_secs| Frequency {
        trip_id: trip_id.to_string(),
        start_time: window.start_time(),
        end_time: window.end_time(),
        headway_secs,
    }))
}
