use geo::MultiLineString;

use crate::feature::AttributeError;

/// named attribute lookup on a feature. values are stored as strings; the
/// typed accessors parse them and report which attribute failed.
pub trait FeatureAttributes {
    /// raw string value of an attribute, or `None` when unset.
    fn get_attribute(&self, key: &str) -> Option<&str>;

    fn get_f64(&self, key: &str) -> Result<Option<f64>, AttributeError> {
        match self.get_attribute(key) {
            None => Ok(None),
            Some(value) => parse_f64(key, value).map(Some),
        }
    }

    fn get_i64(&self, key: &str) -> Result<Option<i64>, AttributeError> {
        match self.get_attribute(key) {
            None => Ok(None),
            Some(value) => parse_i64(key, value).map(Some),
        }
    }
}

/// a feature that can be synthesized into transit service: a line geometry
/// in (x, y) = (longitude, latitude) order along with its attributes.
pub trait SynthesisFeature: FeatureAttributes {
    /// name used when reporting on this feature.
    fn label(&self) -> &str;

    fn geometry(&self) -> &MultiLineString<f64>;
}

pub fn parse_f64(key: &str, value: &str) -> Result<f64, AttributeError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|source| AttributeError::NotANumber {
            key: key.to_string(),
            value: value.to_string(),
            source,
        })
}

/// parses an integer, also accepting decimal renderings of whole numbers
/// such as "3.0", which are common in dBase numeric columns.
pub fn parse_i64(key: &str, value: &str) -> Result<i64, AttributeError> {
    let trimmed = value.trim();
    if let Ok(i) = trimmed.parse::<i64>() {
        return Ok(i);
    }
    let not_an_integer = || AttributeError::NotAnInteger {
        key: key.to_string(),
        value: value.to_string(),
    };
    match trimmed.parse::<f64>() {
        Ok(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(f as i64),
        _ => Err(not_an_integer()),
    }
}
