//! Export a labeled dataset to CSV.
//!
//! Column order and names match `ingest::COLUMNS`, so an exported file loads
//! back unchanged.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::ScoredRecord;
use crate::error::AppError;
use crate::io::ingest::COLUMNS;

/// Write records to a CSV file.
pub fn write_records_csv(path: &Path, records: &[ScoredRecord]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::io(format!("Failed to create export CSV '{}': {e}", path.display())))?;
    write_records(file, records)?;
    tracing::info!(path = %path.display(), rows = records.len(), "wrote dataset CSV");
    Ok(())
}

/// Write records as CSV to any writer.
pub fn write_records<W: Write>(out: W, records: &[ScoredRecord]) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_writer(out);

    writer
        .write_record(COLUMNS)
        .map_err(|e| AppError::io(format!("Failed to write export CSV header: {e}")))?;

    for r in records {
        let f = &r.features;
        // `Display` for f64 is the shortest representation that round-trips.
        writer
            .write_record([
                f.gender.display_name().to_string(),
                f.age.to_string(),
                f.location.display_name().to_string(),
                f.monthly_earnings.to_string(),
                f.trip_frequency.to_string(),
                f.avg_rating.to_string(),
                f.consistency.to_string(),
                r.credit_score.to_string(),
            ])
            .map_err(|e| AppError::io(format!("Failed to write export CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::io(format!("Failed to flush export CSV: {e}")))?;
    Ok(())
}
