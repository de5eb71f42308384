//! CSV export of collected truck records.
//!
//! One file per run, named with the local time of export. No atomic write,
//! no schema version, no compression.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDateTime;
use truckscan_core::{TruckRecord, EXPORT_COLUMNS};

const FILE_PREFIX: &str = "texas_food_trucks";

/// `texas_food_trucks_<YYYYMMDD>_<HHMMSS>.csv`
pub(crate) fn export_file_name(at: NaiveDateTime) -> String {
    format!("{FILE_PREFIX}_{}.csv", at.format("%Y%m%d_%H%M%S"))
}

/// Writes the header row followed by one row per record, in order.
pub(crate) fn write_records<W: Write>(writer: W, records: &[TruckRecord]) -> csv::Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(EXPORT_COLUMNS)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes `records` to a new timestamped file under `dir` and returns its path.
///
/// # Errors
///
/// Returns an error if `dir` cannot be created or the file cannot be written.
pub(crate) fn export_records(
    dir: &Path,
    records: &[TruckRecord],
    at: NaiveDateTime,
) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    let path = dir.join(export_file_name(at));
    let file =
        File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
    write_records(file, records).with_context(|| format!("failed to write {}", path.display()))?;

    tracing::info!(path = %path.display(), rows = records.len(), "export written");
    Ok(path)
}
