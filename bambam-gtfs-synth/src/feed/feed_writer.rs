use std::{fs::File, io::Write, path::Path};

use serde::Serialize;
use zip::{write::SimpleFileOptions, CompressionMethod, ZipWriter};

use crate::feed::SyntheticFeed;

#[derive(thiserror::Error, Debug)]
pub enum FeedWriteError {
    #[error("output '{0}' already exists, use overwrite to replace it")]
    OutputExists(String),
    #[error("failure writing GTFS table {0}: {1}")]
    CsvWriteError(String, csv::Error),
    #[error("failure writing GTFS output: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("failure writing GTFS archive: {source}")]
    ZipError {
        #[from]
        source: zip::result::ZipError,
    },
}

/// writes the feed as GTFS tables. an output path ending in `.zip` produces a
/// zip archive, any other path is treated as a directory of `.txt` files.
/// tables with no rows are not written.
pub fn write_feed(
    feed: &SyntheticFeed,
    output: &Path,
    overwrite: bool,
) -> Result<(), FeedWriteError> {
    let tables = encode_tables(feed)?;
    let is_zip = output
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("zip"))
        .unwrap_or_default();
    if is_zip {
        write_zip(&tables, output, overwrite)
    } else {
        write_directory(&tables, output, overwrite)
    }
}

fn encode_tables(feed: &SyntheticFeed) -> Result<Vec<(&'static str, Vec<u8>)>, FeedWriteError> {
    let tables = vec![
        ("agency.txt", encode_table("agency.txt", &feed.agencies)?),
        ("calendar.txt", encode_table("calendar.txt", &feed.calendars)?),
        ("routes.txt", encode_table("routes.txt", &feed.routes)?),
        ("stops.txt", encode_table("stops.txt", &feed.stops)?),
        ("trips.txt", encode_table("trips.txt", &feed.trips)?),
        ("stop_times.txt", encode_table("stop_times.txt", &feed.stop_times)?),
        ("frequencies.txt", encode_table("frequencies.txt", &feed.frequencies)?),
    ];
    Ok(tables
        .into_iter()
        .filter_map(|(name, table)| match table {
            Some(bytes) => Some((name, bytes)),
            None => {
                log::warn!("no rows for {name}, skipping");
                None
            }
        })
        .collect())
}

fn encode_table<T: Serialize>(name: &str, rows: &[T]) -> Result<Option<Vec<u8>>, FeedWriteError> {
    if rows.is_empty() {
        return Ok(None);
    }
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(vec![]);
    for row in rows.iter() {
        writer
            .serialize(row)
            .map_err(|e| FeedWriteError::CsvWriteError(name.to_string(), e))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| FeedWriteError::StdIoError {
            source: std::io::Error::other(format!("failure flushing {name}: {e}")),
        })?;
    Ok(Some(bytes))
}

fn write_directory(
    tables: &[(&'static str, Vec<u8>)],
    directory: &Path,
    overwrite: bool,
) -> Result<(), FeedWriteError> {
    if !directory.is_dir() {
        std::fs::create_dir_all(directory)?;
    }
    for (name, bytes) in tables.iter() {
        let filepath = directory.join(name);
        if filepath.exists() && !overwrite {
            return Err(FeedWriteError::OutputExists(
                filepath.to_str().unwrap_or_default().to_string(),
            ));
        }
        let mut file = File::create(&filepath)?;
        file.write_all(bytes)?;
    }
    Ok(())
}

fn write_zip(
    tables: &[(&'static str, Vec<u8>)],
    filepath: &Path,
    overwrite: bool,
) -> Result<(), FeedWriteError> {
    if filepath.exists() && !overwrite {
        return Err(FeedWriteError::OutputExists(
            filepath.to_str().unwrap_or_default().to_string(),
        ));
    }
    if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(filepath)?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    for (name, bytes) in tables.iter() {
        zip.start_file(*name, options)?;
        zip.write_all(bytes)?;
    }
    zip.finish()?;
    Ok(())
}
