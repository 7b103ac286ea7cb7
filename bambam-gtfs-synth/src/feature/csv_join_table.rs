use std::{collections::HashMap, path::Path};

use crate::{
    config::CsvJoinConfig,
    feature::{FeatureAttributes, FeatureReadError},
};

/// rows of a CSV file indexed by a key column, used to overlay extra
/// attributes onto features that carry a matching key attribute.
#[derive(Debug, Clone)]
pub struct CsvJoinTable {
    pub feature_key_attribute: String,
    rows: HashMap<String, HashMap<String, String>>,
}

impl CsvJoinTable {
    pub fn try_from_config(conf: &CsvJoinConfig) -> Result<Self, FeatureReadError> {
        let reader = csv::ReaderBuilder::new()
            .from_path(Path::new(&conf.file))
            .map_err(|e| FeatureReadError::CsvJoinError(conf.file.clone(), e))?;
        Self::try_from_reader(reader, &conf.file, &conf.csv_key_column, &conf.feature_key_attribute)
    }

    /// builds a join table from any CSV reader. when a key appears on more than
    /// one row, the last row wins.
    pub fn try_from_reader<R: std::io::Read>(
        mut reader: csv::Reader<R>,
        source_name: &str,
        csv_key_column: &str,
        feature_key_attribute: &str,
    ) -> Result<Self, FeatureReadError> {
        let headers = reader
            .headers()
            .map_err(|e| FeatureReadError::CsvJoinError(source_name.to_string(), e))?
            .clone();
        let key_idx = headers
            .iter()
            .position(|h| h == csv_key_column)
            .ok_or_else(|| {
                FeatureReadError::MissingJoinColumn(
                    source_name.to_string(),
                    csv_key_column.to_string(),
                )
            })?;

        let mut rows = HashMap::new();
        for record in reader.records() {
            let record =
                record.map_err(|e| FeatureReadError::CsvJoinError(source_name.to_string(), e))?;
            let Some(key) = record.get(key_idx) else {
                continue;
            };
            let fields: HashMap<String, String> = headers
                .iter()
                .zip(record.iter())
                .filter(|(_, value)| !value.is_empty())
                .map(|(h, v)| (h.to_string(), v.to_string()))
                .collect();
            if rows.insert(key.to_string(), fields).is_some() {
                log::warn!("join table {source_name} has duplicate key '{key}'");
            }
        }
        log::info!("read {} rows from join table {source_name}", rows.len());
        Ok(Self {
            feature_key_attribute: feature_key_attribute.to_string(),
            rows,
        })
    }

    /// the extra fields for a feature, if its key attribute matches a row.
    pub fn get_extra_fields<F: FeatureAttributes + ?Sized>(
        &self,
        feature: &F,
    ) -> Option<&HashMap<String, String>> {
        feature
            .get_attribute(&self.feature_key_attribute)
            .and_then(|key| self.rows.get(key))
    }
}
