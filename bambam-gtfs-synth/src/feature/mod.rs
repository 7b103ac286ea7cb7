mod attribute_error;
mod csv_join_table;
mod feature_attributes;
mod feature_filter;
mod feature_read_error;
pub mod feature_source;
mod geometry_feature;
mod joined_feature;

pub use attribute_error::AttributeError;
pub use csv_join_table::CsvJoinTable;
pub use feature_attributes::{parse_f64, parse_i64, FeatureAttributes, SynthesisFeature};
pub use feature_filter::{passes_filters, FeatureFilter};
pub use feature_read_error::FeatureReadError;
pub use geometry_feature::GeometryFeature;
pub use joined_feature::JoinedFeature;
