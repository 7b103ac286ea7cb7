use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::feature::FeatureAttributes;

/// configures a predicate deciding whether a feature is included in synthesis.
/// [{ type = "equals", attribute = "status", value = "planned" }]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum FeatureFilter {
    /// attribute is set and equal to the value.
    Equals { attribute: String, value: String },
    /// attribute is unset or not equal to the value.
    NotEquals { attribute: String, value: String },
    /// attribute is set and equal to one of the values.
    OneOf {
        attribute: String,
        values: HashSet<String>,
    },
    /// attribute is set.
    Present { attribute: String },
}

impl FeatureFilter {
    /// test whether a feature passes this filter.
    pub fn matches_filter<F: FeatureAttributes + ?Sized>(&self, feature: &F) -> bool {
        match self {
            FeatureFilter::Equals { attribute, value } => {
                feature.get_attribute(attribute) == Some(value.as_str())
            }
            FeatureFilter::NotEquals { attribute, value } => {
                feature.get_attribute(attribute) != Some(value.as_str())
            }
            FeatureFilter::OneOf { attribute, values } => feature
                .get_attribute(attribute)
                .map(|v| values.contains(v))
                .unwrap_or_default(),
            FeatureFilter::Present { attribute } => feature.get_attribute(attribute).is_some(),
        }
    }
}

/// true when the feature passes every filter. an empty filter list passes everything.
pub fn passes_filters<F: FeatureAttributes + ?Sized>(filters: &[FeatureFilter], feature: &F) -> bool {
    filters.iter().all(|f| f.matches_filter(feature))
}
