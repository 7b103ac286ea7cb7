use crate::feature::AttributeError;

#[derive(thiserror::Error, Debug)]
pub enum SynthesisError {
    #[error("stop spacing must be a positive, finite distance, found {0}")]
    InvalidSpacing(f64),
    #[error("travel speed must be a positive, finite value, found {0}")]
    InvalidSpeed(f64),
    #[error("wait factor must be a positive, finite value, found {0}")]
    InvalidWaitFactor(f64),
    #[error("service end date {1} is before start date {0}")]
    InvalidServiceDates(chrono::NaiveDate, chrono::NaiveDate),
    #[error("time window '{attribute}' hours {start_hour}-{end_hour} exceed the last service hour {max_hour}")]
    InvalidTimeWindow {
        attribute: String,
        start_hour: u32,
        end_hour: u32,
        max_hour: u32,
    },
    #[error("line geometry must contain at least 2 coordinates, found {0}")]
    DegenerateLine(usize),
    #[error("feature geometry contains no lines")]
    EmptyGeometry,
    #[error("features may only contain a single linestring, found {0} parts")]
    MultiPartGeometry(usize),
    #[error("malformed frequency value '{value}' for attribute '{attribute}'")]
    MalformedFrequency { attribute: String, value: String },
    #[error("frequency value '{value}' for attribute '{attribute}' produces a headway below one second")]
    ZeroHeadway { attribute: String, value: String },
    #[error("feature is missing required attribute '{0}'")]
    MissingAttribute(String),
    #[error("attribute '{0}' value '{1}' is out of range")]
    MalformedAttribute(String, String),
    #[error(transparent)]
    AttributeError(#[from] AttributeError),
    #[error("route id '{0}' was already used by a previous feature")]
    DuplicateRouteId(String),
    #[error("trip assembly expects one stop per candidate, found {stops} stops for {candidates} candidates")]
    StopCandidateMismatch { candidates: usize, stops: usize },
    #[error("failure synthesizing route '{route}': {source}")]
    RouteError {
        route: String,
        source: Box<SynthesisError>,
    },
}

impl SynthesisError {
    /// attaches the offending route (or feature label) to this error.
    pub fn for_route(self, route: &str) -> SynthesisError {
        match self {
            SynthesisError::RouteError { .. } => self,
            other => SynthesisError::RouteError {
                route: route.to_string(),
                source: Box::new(other),
            },
        }
    }
}
