use std::path::Path;

use clap::Subcommand;
use geo::Point;
use kdam::tqdm;
use serde::{Deserialize, Serialize};
use uom::si::length::meter;
use wkt::ToWkt;

use crate::{
    app::SynthAppError,
    config::SynthesisConfiguration,
    feature::{
        feature_source, passes_filters, CsvJoinTable, GeometryFeature, JoinedFeature,
        SynthesisFeature,
    },
    feed::{write_feed, SyntheticFeed},
    synthesis::{FeedSynthesizer, SynthesisError},
};

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum SynthOperation {
    /// synthesize a GTFS feed from line features
    Synthesize {
        /// shapefile (.shp) or GeoJSON (.geojson, .json) of route lines
        #[arg(long)]
        input: String,
        /// TOML or JSON run configuration
        #[arg(long)]
        configuration_file: String,
        /// output directory, or a path ending in .zip to write an archive
        #[arg(long)]
        output: String,
        /// replace existing output
        #[arg(long, default_value_t = false)]
        overwrite: bool,
    },
    /// write the candidate stops of each feature to a CSV file with WKT points
    PlaceStops {
        #[arg(long)]
        input: String,
        #[arg(long)]
        configuration_file: String,
        #[arg(long)]
        output_file: String,
    },
}

impl SynthOperation {
    pub fn run(&self) -> Result<(), SynthAppError> {
        match self {
            SynthOperation::Synthesize {
                input,
                configuration_file,
                output,
                overwrite,
            } => {
                let (conf, join, features) = load_inputs(input, configuration_file)?;
                let feed = synthesize_features(&conf, &features, join.as_ref())?;
                if feed.is_empty() {
                    log::warn!("no trips were synthesized from {input}");
                }
                log::info!("synthesized {feed}");
                write_feed(&feed, Path::new(output), *overwrite)?;
                log::info!("wrote GTFS feed to {output}");
                Ok(())
            }
            SynthOperation::PlaceStops {
                input,
                configuration_file,
                output_file,
            } => {
                let (conf, join, features) = load_inputs(input, configuration_file)?;
                place_stops(&conf, &features, join.as_ref(), output_file)
            }
        }
    }
}

/// synthesizes every feature that passes the configured filters, overlaying
/// joined attributes where the join table has a matching row.
pub fn synthesize_features(
    conf: &SynthesisConfiguration,
    features: &[GeometryFeature],
    join: Option<&CsvJoinTable>,
) -> Result<SyntheticFeed, SynthesisError> {
    let mut synth = FeedSynthesizer::new(conf);
    let mut skipped = 0;
    let iter = tqdm!(
        features.iter(),
        total = features.len(),
        desc = "synthesize routes"
    );
    for feature in iter {
        let joined;
        let feature: &dyn SynthesisFeature = match join.and_then(|j| j.get_extra_fields(feature)) {
            Some(extra_fields) => {
                joined = JoinedFeature::new(feature, extra_fields);
                &joined
            }
            None => feature,
        };
        if !passes_filters(&conf.filters, feature) {
            log::info!("skipping {}, filtered out", feature.label());
            skipped += 1;
            continue;
        }
        synth.add_feature(feature)?;
    }
    log::info!(
        "synthesized {} routes, {} features skipped by filters",
        synth.route_count(),
        skipped
    );
    Ok(synth.finish())
}

fn load_inputs(
    input: &str,
    configuration_file: &str,
) -> Result<
    (
        SynthesisConfiguration,
        Option<CsvJoinTable>,
        Vec<GeometryFeature>,
    ),
    SynthAppError,
> {
    log::info!("reading configuration from {configuration_file}");
    let conf = SynthesisConfiguration::try_from_file(Path::new(configuration_file))?;
    let join = match &conf.csv_join {
        Some(join_conf) => {
            log::info!("reading join table from {}", join_conf.file);
            Some(CsvJoinTable::try_from_config(join_conf)?)
        }
        None => None,
    };
    let features = feature_source::read_features(Path::new(input))?;
    Ok((conf, join, features))
}

#[derive(Serialize)]
struct CandidateStopRow<'a> {
    route_id: &'a str,
    part: usize,
    /// meters along the line part
    dist: f64,
    geometry: String,
}

fn place_stops(
    conf: &SynthesisConfiguration,
    features: &[GeometryFeature],
    join: Option<&CsvJoinTable>,
    output_file: &str,
) -> Result<(), SynthAppError> {
    let mut writer = csv::Writer::from_path(output_file)
        .map_err(|e| SynthAppError::CsvError(output_file.to_string(), e))?;
    let synth = FeedSynthesizer::new(conf);
    let mut count = 0;
    for feature in tqdm!(features.iter(), total = features.len(), desc = "place stops") {
        let joined;
        let feature: &dyn SynthesisFeature = match join.and_then(|j| j.get_extra_fields(feature)) {
            Some(extra_fields) => {
                joined = JoinedFeature::new(feature, extra_fields);
                &joined
            }
            None => feature,
        };
        if !passes_filters(&conf.filters, feature) {
            log::info!("skipping {}, filtered out", feature.label());
            continue;
        }
        let (route_id, parts) = synth.place_feature_stops(feature)?;
        for (part, candidates) in parts.iter().enumerate() {
            for candidate in candidates.iter() {
                let row = CandidateStopRow {
                    route_id: &route_id,
                    part,
                    dist: candidate.dist.get::<meter>(),
                    geometry: Point::from(candidate.coord).to_wkt().to_string(),
                };
                writer
                    .serialize(row)
                    .map_err(|e| SynthAppError::CsvError(output_file.to_string(), e))?;
                count += 1;
            }
        }
    }
    writer.flush()?;
    log::info!("wrote {count} candidate stops to {output_file}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::synthesize_features;
    use crate::config::SynthesisConfiguration;
    use crate::feature::{CsvJoinTable, GeometryFeature};
    use config::FileFormat;
    use geo::{line_string, MultiLineString};
    use itertools::Itertools;
    use std::collections::HashMap;

    const CONF: &str = r#"
route_id_attribute = "route_id"
route_name_attribute = "name"
mode = { type = "constant", value = 3 }
spacing = { type = "constant", value = 300.0 }
speed = { type = "constant", value = 10.0 }
start_date = "2024-01-01"
end_date = "2024-12-31"
distance_calculation_policy = "euclidean"

[agency]
name = "Synthetic Transit"
url = "https://example.com"
timezone = "America/Denver"

[[time_windows]]
start_hour = 6
end_hour = 9
attribute = "peak"

[[filters]]
type = "not_equals"
attribute = "status"
value = "cancelled"
"#;

    fn mock_feature(route_id: &str, status: &str) -> GeometryFeature {
        let geometry =
            MultiLineString::new(vec![line_string![(x: 0.0, y: 0.0), (x: 1000.0, y: 0.0)]]);
        let attributes = HashMap::from([
            (String::from("route_id"), route_id.to_string()),
            (String::from("status"), status.to_string()),
            (String::from("peak"), String::from("4")),
        ]);
        GeometryFeature::new(route_id, geometry, attributes)
    }

    #[test]
    fn test_filters_and_join() {
        let conf = SynthesisConfiguration::try_from_str(CONF, FileFormat::Toml)
            .expect("should decode");
        let features = vec![
            mock_feature("A", "planned"),
            mock_feature("B", "cancelled"),
            mock_feature("C", "planned"),
        ];
        // the join overrides the peak frequency of C and cancels A
        let reader = csv::Reader::from_reader("rid,peak,status\nC,10,\nA,,cancelled\n".as_bytes());
        let join = CsvJoinTable::try_from_reader(reader, "join.csv", "rid", "route_id")
            .expect("should build join table");

        let feed = synthesize_features(&conf, &features, Some(&join)).expect("should synthesize");
        let routes = feed.routes.iter().map(|r| r.route_id.as_str()).collect_vec();
        assert_eq!(routes, vec!["C"]);
        assert_eq!(feed.frequencies.len(), 1);
        assert_eq!(feed.frequencies[0].headway_secs, 360);

        let feed = synthesize_features(&conf, &features, None).expect("should synthesize");
        let routes = feed.routes.iter().map(|r| r.route_id.as_str()).collect_vec();
        assert_eq!(routes, vec!["A", "C"]);
        assert!(feed.frequencies.iter().all(|f| f.headway_secs == 900));
    }
}
