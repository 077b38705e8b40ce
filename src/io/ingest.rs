//! CSV ingest and validation.
//!
//! Turns a dataset CSV (as written by `export`) back into `ScoredRecord`s.
//!
//! - Header must contain all eight dataset columns, in any order. Names match
//!   exactly after trimming and BOM stripping. Extra columns are ignored.
//! - Any cell that fails to parse aborts the load with an `Ingest` error naming
//!   the 1-based line and the column.
//! - An empty or zero `credit_score` is recomputed with the generator profile.
//!   A row too short to have a `credit_score` field is an error.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use tracing::{debug, warn};

use crate::data::RandomSource;
use crate::domain::{FeatureRecord, Gender, Location, SCORE_MAX, SCORE_MIN, ScoredRecord};
use crate::error::AppError;
use crate::scoring::{ScoringProfile, compute_score};

/// Dataset columns, in export order.
pub const COLUMNS: [&str; 8] = [
    "gender",
    "age",
    "location",
    "monthly_earnings",
    "trip_frequency",
    "avg_rating",
    "consistency",
    "credit_score",
];

/// Ingest output: parsed records plus bookkeeping for the summary line.
#[derive(Debug, Clone)]
pub struct IngestedData {
    pub records: Vec<ScoredRecord>,
    pub rows_read: usize,
    /// Rows whose score was missing and had to be recomputed.
    pub rescored: usize,
}

/// Load a dataset CSV from disk.
pub fn load_records<R>(path: &Path, rng: &mut R) -> Result<IngestedData, AppError>
where
    R: RandomSource + ?Sized,
{
    let file = File::open(path)
        .map_err(|e| AppError::io(format!("Failed to open CSV '{}': {e}", path.display())))?;
    let data = read_records(file, rng)?;
    debug!(path = %path.display(), rows = data.rows_read, "loaded dataset CSV");
    Ok(data)
}

/// Parse a dataset CSV from any reader.
pub fn read_records<Rd, R>(input: Rd, rng: &mut R) -> Result<IngestedData, AppError>
where
    Rd: Read,
    R: RandomSource + ?Sized,
{
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader
        .headers()
        .map_err(|e| AppError::ingest(format!("Failed to read CSV headers: {e}")))?
        .clone();
    let header_map = build_header_map(&headers);
    ensure_required_columns_exist(&header_map)?;

    let mut records = Vec::new();
    let mut rescored = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // +2: the header is line 1 and lines are 1-based.
        let line = idx + 2;
        let row = result.map_err(|e| AppError::ingest(format!("CSV parse error in row {line}: {e}")))?;

        let features = parse_features(&row, &header_map, line)?;
        let credit_score = match parse_score(&row, &header_map, line)? {
            Some(score) => score,
            None => {
                rescored += 1;
                compute_score(&features, ScoringProfile::Generator, rng)
            }
        };
        records.push(ScoredRecord::new(features, credit_score));
    }

    if records.is_empty() {
        return Err(AppError::ingest("No data rows found"));
    }
    if rescored > 0 {
        warn!(rescored, "credit_score missing on some rows; recomputed");
    }

    Ok(IngestedData {
        rows_read: records.len(),
        records,
        rescored,
    })
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports often prefix the first header with a UTF-8 BOM.
    name.trim().trim_start_matches('\u{feff}').to_string()
}

fn ensure_required_columns_exist(header_map: &HashMap<String, usize>) -> Result<(), AppError> {
    let missing: Vec<&str> = COLUMNS
        .iter()
        .copied()
        .filter(|c| !header_map.contains_key(*c))
        .collect();
    if missing.is_empty() {
        return Ok(());
    }
    Err(AppError::ingest(format!(
        "Missing required column(s): {}",
        missing
            .iter()
            .map(|c| format!("`{c}`"))
            .collect::<Vec<_>>()
            .join(", ")
    )))
}

fn parse_features(
    row: &StringRecord,
    header_map: &HashMap<String, usize>,
    line: usize,
) -> Result<FeatureRecord, AppError> {
    let gender = cell(row, header_map, "gender")
        .unwrap_or_default()
        .parse::<Gender>()
        .map_err(|e| AppError::ingest(format!("{} in row {line}, column gender", e.trim_end_matches('.'))))?;
    let location = cell(row, header_map, "location")
        .unwrap_or_default()
        .parse::<Location>()
        .map_err(|e| AppError::ingest(format!("{} in row {line}, column location", e.trim_end_matches('.'))))?;

    Ok(FeatureRecord {
        gender,
        age: parse_whole(row, header_map, "age", line)?,
        location,
        monthly_earnings: parse_number(row, header_map, "monthly_earnings", line)?,
        trip_frequency: parse_whole(row, header_map, "trip_frequency", line)?,
        avg_rating: parse_number(row, header_map, "avg_rating", line)?,
        consistency: parse_number(row, header_map, "consistency", line)?,
    })
}

/// `None` when the score is blank or zero and must be recomputed.
fn parse_score(row: &StringRecord, header_map: &HashMap<String, usize>, line: usize) -> Result<Option<u16>, AppError> {
    if cell(row, header_map, "credit_score") == Some("") {
        return Ok(None);
    }
    let value = parse_number(row, header_map, "credit_score", line)?;
    if value == 0.0 {
        return Ok(None);
    }
    if value.fract() != 0.0 || value < SCORE_MIN as f64 || value > SCORE_MAX as f64 {
        return Err(AppError::ingest(format!(
            "credit_score {value} out of range [{SCORE_MIN}, {SCORE_MAX}] in row {line}"
        )));
    }
    Ok(Some(value as u16))
}

/// `None` when the row ends before the column.
fn cell<'a>(row: &'a StringRecord, header_map: &HashMap<String, usize>, name: &str) -> Option<&'a str> {
    header_map.get(name).and_then(|&idx| row.get(idx))
}

fn parse_number(row: &StringRecord, header_map: &HashMap<String, usize>, name: &str, line: usize) -> Result<f64, AppError> {
    cell(row, header_map, name)
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .ok_or_else(|| AppError::ingest(format!("Invalid numeric value in row {line}, column {name}")))
}

fn parse_whole(row: &StringRecord, header_map: &HashMap<String, usize>, name: &str, line: usize) -> Result<i32, AppError> {
    let value = parse_number(row, header_map, name, line)?;
    if value.fract() != 0.0 || value < i32::MIN as f64 || value > i32::MAX as f64 {
        return Err(AppError::ingest(format!(
            "Expected a whole number in row {line}, column {name}"
        )));
    }
    Ok(value as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SequenceSource;
    use crate::error::ErrorKind;

    const HEADER: &str = "gender,age,location,monthly_earnings,trip_frequency,avg_rating,consistency,credit_score\n";

    fn read(csv: &str) -> Result<IngestedData, AppError> {
        read_records(csv.as_bytes(), &mut SequenceSource::constant(0.5))
    }

    #[test]
    fn reads_exported_rows() {
        let csv = format!("{HEADER}Male,36,Urban,3300,105,4,0.1,689\nFemale,22,Rural,1800.5,85,3.2,0.3,512\n");
        let data = read(&csv).unwrap();
        assert_eq!(data.rows_read, 2);
        assert_eq!(data.rescored, 0);
        assert_eq!(data.records[0].credit_score, 689);
        assert_eq!(data.records[1].features.gender, Gender::Female);
        assert!((data.records[1].features.monthly_earnings - 1800.5).abs() < 1e-9);
    }

    #[test]
    fn columns_in_any_order_with_bom_and_value_case() {
        let csv = "\u{feff}credit_score, consistency ,avg_rating,trip_frequency,monthly_earnings,location,age,gender\n\
                   700, 0.1 ,4.0,105,2500,URBAN,35,male\n";
        let data = read(csv).unwrap();
        let f = data.records[0].features;
        assert_eq!(f.gender, Gender::Male);
        assert_eq!(f.location, Location::Urban);
        assert_eq!(f.age, 35);
        assert_eq!(data.records[0].credit_score, 700);
    }

    #[test]
    fn header_names_are_case_sensitive() {
        let csv = "GENDER,AGE,LOCATION,MONTHLY_EARNINGS,TRIP_FREQUENCY,AVG_RATING,CONSISTENCY,CREDIT_SCORE\n\
                   Male,35,Urban,2500,105,4.0,0.1,700\n";
        let err = read(csv).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Ingest);
        assert!(err.message().starts_with("Missing required column(s): `gender`"));
    }

    #[test]
    fn short_row_without_score_field_is_rejected() {
        let csv = format!("{HEADER}Male,35,Urban,2500,105,4.0,0.1\n");
        let err = read(&csv).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Ingest);
        assert_eq!(err.message(), "Invalid numeric value in row 2, column credit_score");
    }

    #[test]
    fn short_row_missing_features_is_rejected() {
        let csv = format!("{HEADER}Male,35\n");
        let err = read(&csv).unwrap_err();
        assert!(err.message().contains("row 2, column location"));
    }

    #[test]
    fn missing_column_is_ingest_error() {
        let err = read("gender,age,location\nMale,30,Urban\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Ingest);
        assert!(err.message().contains("`monthly_earnings`"));
    }

    #[test]
    fn bad_numeric_names_row_and_column() {
        let csv = format!("{HEADER}Male,36,Urban,3300,105,4,0.1,689\nMale,abc,Urban,3300,105,4,0.1,689\n");
        let err = read(&csv).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Ingest);
        assert_eq!(err.message(), "Invalid numeric value in row 3, column age");
    }

    #[test]
    fn blank_or_zero_score_is_recomputed() {
        // Generator profile on the form defaults with a neutral jitter:
        // 650 +25 +5 +15 +0 +0 -6 +0 = 689
        let csv = format!("{HEADER}Male,35,Urban,2500,105,4.0,0.1,\nMale,35,Urban,2500,105,4.0,0.1,0\n");
        let data = read(&csv).unwrap();
        assert_eq!(data.rescored, 2);
        assert!(data.records.iter().all(|r| r.credit_score == 689));
    }

    #[test]
    fn out_of_range_score_is_rejected() {
        let csv = format!("{HEADER}Male,35,Urban,2500,105,4.0,0.1,900\n");
        assert_eq!(read(&csv).unwrap_err().kind(), ErrorKind::Ingest);
    }

    #[test]
    fn header_only_has_no_rows() {
        let err = read(HEADER).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Ingest);
        assert_eq!(err.message(), "No data rows found");
    }

    #[test]
    fn unknown_gender_is_rejected() {
        let csv = format!("{HEADER}Other,35,Urban,2500,105,4.0,0.1,700\n");
        let err = read(&csv).unwrap_err();
        assert!(err.message().contains("row 2, column gender"));
    }
}
