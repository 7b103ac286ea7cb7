use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeatureReadError {
    #[error("unsupported feature file type: {0}")]
    UnsupportedFileType(String),
    #[error("failure reading shapefile {0}: {1}")]
    ShapefileError(String, shapefile::Error),
    #[error("failure reading GeoJSON {0}: {1}")]
    GeoJsonError(String, String),
    #[error("feature {0} has unsupported geometry type {1}, expected a line")]
    UnsupportedGeometry(String, String),
    #[error("failure reading join table {0}: {1}")]
    CsvJoinError(String, csv::Error),
    #[error("join table {0} is missing key column '{1}'")]
    MissingJoinColumn(String, String),
    #[error("failure reading {0}: {1}")]
    StdIoError(String, std::io::Error),
}
