use std::collections::HashMap;

use geo::MultiLineString;
use crate::feature::{FeatureAttributes, SynthesisFeature};

/// a feature as read from its source file, with no joined attributes.
#[derive(Debug, Clone)]
pub struct GeometryFeature {
    pub label: String,
    pub geometry: MultiLineString<f64>,
    pub attributes: HashMap<String, String>,
}

impl GeometryFeature {
    pub fn new(
        label: &str,
        geometry: MultiLineString<f64>,
        attributes: HashMap<String, String>,
    ) -> Self {
        Self {
            label: label.to_string(),
            geometry,
            attributes,
        }
    }
}

impl FeatureAttributes for GeometryFeature {
    fn get_attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

impl SynthesisFeature for GeometryFeature {
    fn label(&self) -> &str {
        &self.label
    }

    fn geometry(&self) -> &MultiLineString<f64> {
        &self.geometry
    }
}
