use serde::{Deserialize, Serialize};

/// configures a join of extra attributes from a CSV file onto each feature.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct CsvJoinConfig {
    /// path to the CSV file
    pub file: String,
    /// column in the CSV file holding the join key
    pub csv_key_column: String,
    /// feature attribute holding the join key
    pub feature_key_attribute: String,
}
