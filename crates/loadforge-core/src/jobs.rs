use crate::error::{LfResult, LoadForgeError};
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Reads job durations from a CSV file: one header line, then
/// `job_id,duration` records. Input order defines job identity; the id
/// column is present in the format but positional index is what the
/// optimizer keys on.
pub fn load_job_durations<P: AsRef<Path>>(path: P) -> LfResult<Vec<u64>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut durations = Vec::new();
    for (index, result) in rdr.records().enumerate() {
        let record = result?;
        // Header is line 1, first record is line 2.
        let line = index + 2;

        if record.len() < 2 {
            return Err(LoadForgeError::Validation(format!(
                "line {}: expected job_id,duration",
                line
            )));
        }

        let raw = &record[1];
        let duration: u64 = raw.parse().map_err(|_| {
            LoadForgeError::Validation(format!("line {}: invalid duration '{}'", line, raw))
        })?;
        durations.push(duration);
    }

    if durations.is_empty() {
        return Err(LoadForgeError::Validation(format!(
            "no job records in {}",
            path.display()
        )));
    }

    debug!("Loaded {} job durations from {}", durations.len(), path.display());
    Ok(durations)
}
