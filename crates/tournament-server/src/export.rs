//! CSV and JSON file exports of the tournament catalog.
//!
//! Both formats use the same human-readable column labels. CSV joins the
//! streaming links into one cell; JSON keeps them as an array.

use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;
use tournament_core::Tournament;

/// File name of the CSV export inside the output directory.
pub const CSV_FILE: &str = "tournaments.csv";
/// File name of the JSON export inside the output directory.
pub const JSON_FILE: &str = "tournaments.json";

/// CSV header, in column order.
pub const HEADERS: [&str; 9] = [
    "Tournament Name",
    "Sport",
    "Level",
    "Start Date",
    "End Date",
    "Tournament Official URL",
    "Streaming Partners/Links",
    "Tournament Image",
    "Summary of Tournament",
];

/// Errors that can occur while writing an export file.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One exported tournament. Absent optional fields serialize as `""`.
#[derive(Serialize)]
struct ExportRecord<'a> {
    #[serde(rename = "Tournament Name")]
    name: &'a str,
    #[serde(rename = "Sport")]
    sport: &'a str,
    #[serde(rename = "Level")]
    level: &'a str,
    #[serde(rename = "Start Date")]
    start_date: &'a str,
    #[serde(rename = "End Date")]
    end_date: &'a str,
    #[serde(rename = "Tournament Official URL")]
    official_url: &'a str,
    #[serde(rename = "Streaming Partners/Links")]
    streaming_links: &'a [String],
    #[serde(rename = "Tournament Image")]
    image_url: &'a str,
    #[serde(rename = "Summary of Tournament")]
    summary: &'a str,
}

impl<'a> From<&'a Tournament> for ExportRecord<'a> {
    fn from(t: &'a Tournament) -> Self {
        Self {
            name: &t.name,
            sport: &t.sport,
            level: &t.level,
            start_date: &t.start_date,
            end_date: &t.end_date,
            official_url: t.official_url.as_deref().unwrap_or_default(),
            streaming_links: &t.streaming_links,
            image_url: t.image_url.as_deref().unwrap_or_default(),
            summary: t.summary.as_deref().unwrap_or_default(),
        }
    }
}

fn ensure_parent(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

/// Writes `tournaments` to a CSV file at `path`, replacing any existing file.
///
/// The parent directory is created if missing.
pub fn write_csv<P: AsRef<Path>>(path: P, tournaments: &[Tournament]) -> Result<(), ExportError> {
    let path = path.as_ref();
    ensure_parent(path)?;

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(HEADERS)?;
    for t in tournaments {
        let record = ExportRecord::from(t);
        let links = record.streaming_links.join(", ");
        writer.write_record([
            record.name,
            record.sport,
            record.level,
            record.start_date,
            record.end_date,
            record.official_url,
            links.as_str(),
            record.image_url,
            record.summary,
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes `tournaments` as a pretty-printed JSON array at `path`, replacing
/// any existing file.
///
/// The parent directory is created if missing.
pub fn write_json<P: AsRef<Path>>(path: P, tournaments: &[Tournament]) -> Result<(), ExportError> {
    let path = path.as_ref();
    ensure_parent(path)?;

    let records: Vec<ExportRecord<'_>> = tournaments.iter().map(ExportRecord::from).collect();

    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, &records)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
