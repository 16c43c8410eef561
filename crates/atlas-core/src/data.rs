// File: crates/atlas-core/src/data.rs
// Summary: CSV dataset loading with numeric coercion, plus label/format helpers.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::AtlasError;

/// Earliest year with a per-year states dataset.
pub const YEAR_MIN: u16 = 2004;
/// Latest year with a per-year states dataset (also the default).
pub const YEAR_MAX: u16 = 2023;

/// One migration record: a state code keyed count, optionally attributed
/// to a country of origin.
#[derive(Clone, Debug, Deserialize)]
pub struct MigrationRow {
    #[serde(rename = "STATE_CODE")]
    pub state_code: String,
    #[serde(rename = "MIGRANT")]
    pub migrant: f64,
    #[serde(rename = "COUNTRY", default)]
    pub country: Option<String>,
}

/// One age-profile record: age bucket plus two series values (thousands).
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct AgeRow {
    pub x: f64,
    pub y1: f64,
    pub y2: f64,
}

/// Path of the per-year states dataset under `data_dir`.
pub fn year_csv_path(data_dir: &Path, year: u16) -> PathBuf {
    data_dir.join(format!("states{year}.csv"))
}

pub fn load_migration_csv(path: &Path) -> Result<Vec<MigrationRow>, AtlasError> {
    load_csv(path)
}

pub fn load_age_csv(path: &Path) -> Result<Vec<AgeRow>, AtlasError> {
    load_csv(path)
}

// Shared CSV walk: the file must open and have headers; individual bad
// records are logged and skipped so one malformed row cannot blank a chart.
fn load_csv<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<Vec<T>, AtlasError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| csv_open_error(path, e))?;

    let mut out = Vec::new();
    for (i, rec) in rdr.deserialize::<T>().enumerate() {
        match rec {
            Ok(row) => out.push(row),
            Err(e) => {
                log::warn!("{}: skipping record {}: {}", path.display(), i + 1, e);
            }
        }
    }
    if out.is_empty() {
        return Err(AtlasError::Parse {
            path: path.to_path_buf(),
            detail: "no parsable records".into(),
        });
    }
    Ok(out)
}

fn csv_open_error(path: &Path, e: csv::Error) -> AtlasError {
    let detail = e.to_string();
    match e.into_kind() {
        csv::ErrorKind::Io(source) => AtlasError::Load { path: path.to_path_buf(), source },
        _ => AtlasError::Parse { path: path.to_path_buf(), detail },
    }
}

/// Fixed state code to abbreviation table. Codes outside 1..=8 (including
/// the "other territories" code 9) have no label.
pub fn state_label(code: &str) -> &'static str {
    match code {
        "1" => "NSW",
        "2" => "VIC",
        "3" => "QLD",
        "4" => "SA",
        "5" => "WA",
        "6" => "TAS",
        "7" => "NT",
        "8" => "ACT",
        _ => "",
    }
}

/// Format a count with thousands separators: 1234567 -> "1,234,567".
pub fn group_thousands(v: f64) -> String {
    let n = v.round() as i64;
    let digits = n.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if n < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
