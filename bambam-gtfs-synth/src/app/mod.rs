mod operation;
mod synth_app;
mod synth_app_error;

pub use operation::{synthesize_features, SynthOperation};
pub use synth_app::SynthApp;
pub use synth_app_error::SynthAppError;
