mod candidate_stop;
mod distance_calculation_policy;
mod feed_synthesizer;
pub mod frequency_ops;
mod id_generator;
mod multi_line_policy;
pub mod stop_placement;
mod synthesis_error;
mod time_window;
pub mod trip_assembly;

pub use candidate_stop::CandidateStop;
pub use distance_calculation_policy::{interpolate, DistanceCalculationPolicy};
pub use feed_synthesizer::{FeedSynthesizer, AGENCY_ID, SERVICE_ID};
pub use id_generator::IdGenerator;
pub use multi_line_policy::MultiLinePolicy;
pub use synthesis_error::SynthesisError;
pub use time_window::{TimeWindow, MAX_SERVICE_HOUR};
pub use trip_assembly::{AssembledTrip, TripAssemblyParameters, TripDirection};
