use thiserror::Error;

use crate::{feature::FeatureReadError, feed::FeedWriteError, synthesis::SynthesisError};

#[derive(Error, Debug)]
pub enum SynthAppError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("{source}")]
    SynthesisError {
        #[from]
        source: SynthesisError,
    },
    #[error("failure reading features: {source}")]
    FeatureReadError {
        #[from]
        source: FeatureReadError,
    },
    #[error("failure writing feed: {source}")]
    FeedWriteError {
        #[from]
        source: FeedWriteError,
    },
    #[error("failure writing {0}: {1}")]
    CsvError(String, csv::Error),
    #[error("failure writing output: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
}
