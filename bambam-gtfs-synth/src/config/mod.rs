mod agency_config;
mod csv_join_config;
mod synthesis_config;
mod value_binding;

pub use agency_config::AgencyConfig;
pub use csv_join_config::CsvJoinConfig;
pub use synthesis_config::SynthesisConfiguration;
pub use value_binding::ValueBinding;
