use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Enumerates alternative ways to handle
/// features whose geometry has more than one line part
#[derive(Serialize, Deserialize, Debug, ValueEnum, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MultiLinePolicy {
    /// a multi-part geometry fails the whole run.
    #[default]
    Fail,
    /// each part becomes an independent segment of the feature's route,
    /// with its own stops and trips.
    SplitParts,
}
