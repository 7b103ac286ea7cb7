use std::collections::HashMap;

use geo::MultiLineString;

use crate::feature::{FeatureAttributes, GeometryFeature, SynthesisFeature};

/// a feature overlaid with fields joined from an external table. joined
/// values win; lookups fall back to the feature's own attributes.
#[derive(Debug, Clone)]
pub struct JoinedFeature<'a> {
    pub feature: &'a GeometryFeature,
    pub extra_fields: &'a HashMap<String, String>,
}

impl<'a> JoinedFeature<'a> {
    pub fn new(feature: &'a GeometryFeature, extra_fields: &'a HashMap<String, String>) -> Self {
        Self {
            feature,
            extra_fields,
        }
    }
}

impl FeatureAttributes for JoinedFeature<'_> {
    fn get_attribute(&self, key: &str) -> Option<&str> {
        self.extra_fields
            .get(key)
            .map(String::as_str)
            .or_else(|| self.feature.get_attribute(key))
    }
}

impl SynthesisFeature for JoinedFeature<'_> {
    fn label(&self) -> &str {
        self.feature.label()
    }

    fn geometry(&self) -> &MultiLineString<f64> {
        self.feature.geometry()
    }
}
