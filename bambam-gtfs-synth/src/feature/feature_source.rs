use std::{collections::HashMap, path::Path};

use geo::{Geometry, MultiLineString};
use shapefile::dbase::FieldValue;

use crate::feature::{FeatureReadError, GeometryFeature};

/// reads line features from a file, choosing the reader by file extension:
/// `.shp` for ESRI shapefiles and `.geojson`/`.json` for GeoJSON.
pub fn read_features(path: &Path) -> Result<Vec<GeometryFeature>, FeatureReadError> {
    let filename = path.to_str().unwrap_or_default();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("shp") => read_shapefile(filename),
        Some("geojson") | Some("json") => {
            let contents = std::fs::read_to_string(path)
                .map_err(|e| FeatureReadError::StdIoError(filename.to_string(), e))?;
            read_geojson_str(&contents, filename)
        }
        _ => Err(FeatureReadError::UnsupportedFileType(filename.to_string())),
    }
}

/// reads polyline shapes and their dBase records from a shapefile.
fn read_shapefile(filepath: &str) -> Result<Vec<GeometryFeature>, FeatureReadError> {
    let rows = shapefile::read(filepath)
        .map_err(|e| FeatureReadError::ShapefileError(filepath.to_string(), e))?;

    let mut processed = vec![];
    for (idx, (shape, record)) in rows.into_iter().enumerate() {
        let label = format!("{filepath} row {idx}");
        let shapetype = shape.shapetype();
        let geometry: MultiLineString<f64> = match shape {
            shapefile::Shape::Polyline(polyline) => MultiLineString::<f64>::try_from(polyline),
            shapefile::Shape::PolylineM(polyline) => MultiLineString::<f64>::try_from(polyline),
            shapefile::Shape::PolylineZ(polyline) => MultiLineString::<f64>::try_from(polyline),
            _ => {
                return Err(FeatureReadError::UnsupportedGeometry(
                    label,
                    shapetype.to_string(),
                ))
            }
        }
        .map_err(|e| FeatureReadError::UnsupportedGeometry(label.clone(), format!("{e}")))?;

        let mut attributes = HashMap::new();
        for (name, value) in record.into_iter() {
            if let Some(v) = field_value_to_string(&name, &value) {
                attributes.insert(name, v);
            }
        }
        processed.push(GeometryFeature::new(&label, geometry, attributes));
    }
    log::info!("read {} features from {filepath}", processed.len());
    Ok(processed)
}

/// renders a dBase value as an attribute string. null values are unset.
fn field_value_to_string(name: &str, value: &FieldValue) -> Option<String> {
    match value {
        FieldValue::Character(s) => s.as_ref().map(|s| s.trim().to_string()),
        FieldValue::Numeric(n) => n.map(render_number),
        FieldValue::Float(f) => f.map(|f| render_number(f as f64)),
        FieldValue::Double(d) => Some(render_number(*d)),
        FieldValue::Integer(i) => Some(i.to_string()),
        FieldValue::Logical(b) => b.map(|b| b.to_string()),
        other => {
            log::debug!(
                "ignoring field '{name}' with unsupported type {}",
                other.field_type()
            );
            None
        }
    }
}

/// whole numbers render without a fractional part, so "3" rather than "3.0".
fn render_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// reads LineString and MultiLineString features from a GeoJSON
/// FeatureCollection (or a single Feature).
pub fn read_geojson_str(
    contents: &str,
    source_name: &str,
) -> Result<Vec<GeometryFeature>, FeatureReadError> {
    let geojson: geojson::GeoJson = contents
        .parse()
        .map_err(|e: geojson::Error| {
            FeatureReadError::GeoJsonError(source_name.to_string(), e.to_string())
        })?;
    let features = match geojson {
        geojson::GeoJson::FeatureCollection(fc) => fc.features,
        geojson::GeoJson::Feature(f) => vec![f],
        geojson::GeoJson::Geometry(_) => {
            return Err(FeatureReadError::GeoJsonError(
                source_name.to_string(),
                String::from("expected a Feature or FeatureCollection, found a bare Geometry"),
            ))
        }
    };

    let mut processed = vec![];
    for (idx, feature) in features.into_iter().enumerate() {
        let label = match &feature.id {
            Some(geojson::feature::Id::String(s)) => format!("{source_name} feature {s}"),
            Some(geojson::feature::Id::Number(n)) => format!("{source_name} feature {n}"),
            None => format!("{source_name} feature {idx}"),
        };
        let geometry = feature.geometry.ok_or_else(|| {
            FeatureReadError::UnsupportedGeometry(label.clone(), String::from("null"))
        })?;
        let geometry: Geometry<f64> = geometry.try_into().map_err(|e: geojson::Error| {
            FeatureReadError::GeoJsonError(source_name.to_string(), e.to_string())
        })?;
        let lines = match geometry {
            Geometry::LineString(line) => MultiLineString::new(vec![line]),
            Geometry::MultiLineString(lines) => lines,
            other => {
                return Err(FeatureReadError::UnsupportedGeometry(
                    label,
                    geometry_type_name(&other).to_string(),
                ))
            }
        };
        let attributes = feature
            .properties
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(k, v)| json_value_to_string(v).map(|v| (k, v)))
            .collect::<HashMap<_, _>>();
        processed.push(GeometryFeature::new(&label, lines, attributes));
    }
    log::info!("read {} features from {source_name}", processed.len());
    Ok(processed)
}

fn json_value_to_string(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

fn geometry_type_name(geometry: &Geometry<f64>) -> &'static str {
    match geometry {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}
