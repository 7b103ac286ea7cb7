use serde::{Deserialize, Serialize};

use crate::{
    feature::{FeatureAttributes, SynthesisFeature},
    synthesis::SynthesisError,
};

/// where a per-feature numeric parameter comes from: a single value for every
/// feature, or an attribute on each feature with an optional fallback.
///
/// ```toml
/// spacing = { type = "constant", value = 400.0 }
/// speed = { type = "attribute", name = "speed_mps", default = 8.0 }
/// ```
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum ValueBinding<T> {
    Constant {
        value: T,
    },
    Attribute {
        name: String,
        #[serde(default)]
        default: Option<T>,
    },
}

impl ValueBinding<f64> {
    pub fn resolve<F: SynthesisFeature + ?Sized>(&self, feature: &F) -> Result<f64, SynthesisError> {
        match self {
            ValueBinding::Constant { value } => Ok(*value),
            ValueBinding::Attribute { name, default } => feature
                .get_f64(name)?
                .or(*default)
                .ok_or_else(|| SynthesisError::MissingAttribute(name.clone())),
        }
    }
}

impl ValueBinding<i32> {
    pub fn resolve<F: SynthesisFeature + ?Sized>(&self, feature: &F) -> Result<i32, SynthesisError> {
        match self {
            ValueBinding::Constant { value } => Ok(*value),
            ValueBinding::Attribute { name, default } => {
                let value = match feature.get_i64(name)? {
                    Some(v) => Some(i32::try_from(v).map_err(|_| {
                        SynthesisError::MalformedAttribute(name.clone(), v.to_string())
                    })?),
                    None => *default,
                };
                value.ok_or_else(|| SynthesisError::MissingAttribute(name.clone()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ValueBinding;
    use crate::feature::GeometryFeature;
    use crate::synthesis::SynthesisError;
    use geo::MultiLineString;
    use std::collections::HashMap;

    fn mock_feature(attributes: &[(&str, &str)]) -> GeometryFeature {
        let attributes = attributes
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        GeometryFeature::new("test", MultiLineString::new(vec![]), attributes)
    }

    #[test]
    fn test_resolve_f64() {
        let feature = mock_feature(&[("spacing", "250")]);
        let constant: ValueBinding<f64> = ValueBinding::Constant { value: 400.0 };
        assert_eq!(constant.resolve(&feature).unwrap(), 400.0);
        let attr: ValueBinding<f64> = ValueBinding::Attribute {
            name: String::from("spacing"),
            default: Some(400.0),
        };
        assert_eq!(attr.resolve(&feature).unwrap(), 250.0);
        let fallback: ValueBinding<f64> = ValueBinding::Attribute {
            name: String::from("missing"),
            default: Some(400.0),
        };
        assert_eq!(fallback.resolve(&feature).unwrap(), 400.0);
        let required: ValueBinding<f64> = ValueBinding::Attribute {
            name: String::from("missing"),
            default: None,
        };
        match required.resolve(&feature) {
            Err(SynthesisError::MissingAttribute(name)) => assert_eq!(name, "missing"),
            other => panic!("expected MissingAttribute, found {other:?}"),
        }
    }

    #[test]
    fn test_resolve_i32() {
        let feature = mock_feature(&[("mode", "3.0"), ("bad", "tram")]);
        let attr: ValueBinding<i32> = ValueBinding::Attribute {
            name: String::from("mode"),
            default: None,
        };
        assert_eq!(attr.resolve(&feature).unwrap(), 3);
        let bad: ValueBinding<i32> = ValueBinding::Attribute {
            name: String::from("bad"),
            default: Some(3),
        };
        match bad.resolve(&feature) {
            Err(SynthesisError::AttributeError(_)) => {}
            other => panic!("expected AttributeError, found {other:?}"),
        }
    }

    #[test]
    fn test_deserialize() {
        let binding: ValueBinding<f64> =
            serde_json::from_str(r#"{ "type": "attribute", "name": "speed" }"#)
                .expect("should deserialize");
        assert_eq!(
            binding,
            ValueBinding::Attribute {
                name: String::from("speed"),
                default: None
            }
        );
    }
}
