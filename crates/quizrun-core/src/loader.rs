//! CSV problem file loader.
//!
//! Reads `question,answer` rows with no header line. The loader consumes
//! whatever reader it is handed; the caller owns the stream's lifecycle.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::QuizError;

/// One raw row from a problems file. Fields are matched by position.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Record {
    /// Question text, exactly as written in the file.
    pub question: String,
    /// Expected answer, untrimmed at this stage.
    pub answer: String,
}

/// Decode all records from a reader.
///
/// Any malformed row (bad quoting, field count other than two) surfaces as
/// [`QuizError::Parse`].
pub fn read_records<R: Read>(input: R) -> Result<Vec<Record>, QuizError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(input);

    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

/// Open a problems file and decode all records from it.
pub fn load_problem_file(path: &Path) -> Result<Vec<Record>, QuizError> {
    let file = File::open(path).map_err(|source| QuizError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let records = read_records(file)?;
    tracing::debug!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}
