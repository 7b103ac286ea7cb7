use thiserror::Error;

#[derive(Error, Debug)]
pub enum AttributeError {
    #[error("attribute '{key}' value '{value}' is not a number: {source}")]
    NotANumber {
        key: String,
        value: String,
        source: std::num::ParseFloatError,
    },
    #[error("attribute '{key}' value '{value}' is not an integer")]
    NotAnInteger { key: String, value: String },
}
