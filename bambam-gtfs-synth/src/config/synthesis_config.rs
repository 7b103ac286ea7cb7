use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    app::SynthAppError,
    config::{AgencyConfig, CsvJoinConfig, ValueBinding},
    feature::FeatureFilter,
    synthesis::{
        DistanceCalculationPolicy, MultiLinePolicy, SynthesisError, TimeWindow, MAX_SERVICE_HOUR,
    },
};

/// defines behaviors for a synthesis run
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct SynthesisConfiguration {
    /// attribute holding each route's id
    pub route_id_attribute: String,
    /// attribute holding each route's display name
    pub route_name_attribute: String,
    /// GTFS route_type of each route
    pub mode: ValueBinding<i32>,
    /// distance between stops, in meters
    pub spacing: ValueBinding<f64>,
    /// travel speed, in meters per second
    pub speed: ValueBinding<f64>,
    #[serde(default)]
    pub time_windows: Vec<TimeWindow>,
    /// if true, frequency attributes are minutes between departures,
    /// otherwise they are arrivals per hour.
    #[serde(default)]
    pub use_periods: bool,
    /// if true, each route also runs a trip in reverse.
    #[serde(default)]
    pub bidirectional: bool,
    /// headways are divided by this factor.
    #[serde(default = "default_wait_factor")]
    pub wait_factor: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub agency: AgencyConfig,
    #[serde(default)]
    pub multi_line_policy: MultiLinePolicy,
    #[serde(default)]
    pub distance_calculation_policy: DistanceCalculationPolicy,
    #[serde(default)]
    pub csv_join: Option<CsvJoinConfig>,
    /// features must pass all filters to be synthesized.
    #[serde(default)]
    pub filters: Vec<FeatureFilter>,
}

fn default_wait_factor() -> f64 {
    1.0
}

impl SynthesisConfiguration {
    /// reads a configuration file. the format (TOML, JSON, ...) is inferred
    /// from the file extension.
    pub fn try_from_file(path: &Path) -> Result<Self, SynthAppError> {
        let filename = path.to_str().unwrap_or_default();
        let conf: SynthesisConfiguration = config::Config::builder()
            .add_source(config::File::from(path))
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| {
                SynthAppError::ConfigurationError(format!("failure reading {filename}: {e}"))
            })?;
        conf.validate()?;
        Ok(conf)
    }

    /// reads a configuration from a string in the given format.
    pub fn try_from_str(contents: &str, format: config::FileFormat) -> Result<Self, SynthAppError> {
        let conf: SynthesisConfiguration = config::Config::builder()
            .add_source(config::File::from_str(contents, format))
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| SynthAppError::ConfigurationError(format!("failure decoding: {e}")))?;
        conf.validate()?;
        Ok(conf)
    }

    /// checks values that can be validated without looking at any feature.
    pub fn validate(&self) -> Result<(), SynthesisError> {
        if !(self.wait_factor.is_finite() && self.wait_factor > 0.0) {
            return Err(SynthesisError::InvalidWaitFactor(self.wait_factor));
        }
        if let ValueBinding::Constant { value } = self.spacing {
            if !(value.is_finite() && value > 0.0) {
                return Err(SynthesisError::InvalidSpacing(value));
            }
        }
        if let ValueBinding::Constant { value } = self.speed {
            if !(value.is_finite() && value > 0.0) {
                return Err(SynthesisError::InvalidSpeed(value));
            }
        }
        if self.end_date < self.start_date {
            return Err(SynthesisError::InvalidServiceDates(
                self.start_date,
                self.end_date,
            ));
        }
        for window in self.time_windows.iter() {
            if !window.is_within_service_day() {
                return Err(SynthesisError::InvalidTimeWindow {
                    attribute: window.attribute.clone(),
                    start_hour: window.start_hour,
                    end_hour: window.end_hour,
                    max_hour: MAX_SERVICE_HOUR,
                });
            }
            if window.end_hour <= window.start_hour {
                log::warn!(
                    "time window '{}' ends at hour {} which is not after its start hour {}",
                    window.attribute,
                    window.end_hour,
                    window.start_hour
                );
            }
        }
        Ok(())
    }
}
