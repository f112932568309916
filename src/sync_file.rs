use std::path::Path;

use crate::error::TimelineError;
use crate::types::TranscriptionRecord;

/// Parse `.sync` transcription text: one record per line,
/// `startSeconds durationSeconds phoneticSymbol`, whitespace-separated.
///
/// Blank lines and `#` comment lines are skipped. Any other irregularity
/// fails the whole parse; callers never see a partially populated list.
pub fn parse_sync_str(text: &str) -> Result<Vec<TranscriptionRecord>, TimelineError> {
    let mut records = Vec::new();
    for (line_idx, raw_line) in text.lines().enumerate() {
        let line_no = line_idx + 1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 3 {
            return Err(TimelineError::malformed_record(
                line_no,
                format!("expected 3 whitespace-separated fields, found {}", fields.len()),
            ));
        }

        let start_seconds = parse_seconds(fields[0], line_no, "start time")?;
        let duration_seconds = parse_seconds(fields[1], line_no, "duration")?;
        records.push(TranscriptionRecord {
            symbol: fields[2].to_string(),
            start_seconds,
            duration_seconds,
        });
    }
    Ok(records)
}

/// Read and parse a `.sync` file from disk.
pub fn parse_sync_file(path: &Path) -> Result<Vec<TranscriptionRecord>, TimelineError> {
    let text =
        std::fs::read_to_string(path).map_err(|e| TimelineError::io("read sync file", e))?;
    parse_sync_str(&text)
}

fn parse_seconds(field: &str, line_no: usize, what: &str) -> Result<f64, TimelineError> {
    let value: f64 = field.parse().map_err(|_| {
        TimelineError::malformed_record(line_no, format!("non-numeric {what} '{field}'"))
    })?;
    if !value.is_finite() || value < 0.0 {
        return Err(TimelineError::malformed_record(
            line_no,
            format!("{what} must be a finite non-negative number, got '{field}'"),
        ));
    }
    Ok(value)
}
