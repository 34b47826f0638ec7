//! Reading raw record batches and writing the output document

use crate::error::{ProcessorError, Result};
use crate::types::{OutputDocument, ReviewEntry};
use serde_json::Value;
use sift_domain::RawRecord;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Write `records` as a pretty-printed JSON document to `destination`.
///
/// Missing parent directories are created. The file is UTF-8 with non-ASCII
/// characters written literally and 2-space indentation.
///
/// # Errors
///
/// Any I/O or serialization failure is returned; nothing is retried.
pub fn persist(records: &[ReviewEntry], destination: impl AsRef<Path>, model_used: &str) -> Result<()> {
    let destination = destination.as_ref();
    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let document = OutputDocument::new(records, model_used);
    let mut writer = BufWriter::new(File::create(destination)?);
    serde_json::to_writer_pretty(&mut writer, &document)?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    info!("Saved {} reviews to {}", records.len(), destination.display());
    Ok(())
}

/// Read a JSON array of raw records from `path`
///
/// # Errors
///
/// `ProcessorError::InvalidInput` if the document is not an array of objects.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<RawRecord>> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let value: Value = serde_json::from_reader(reader)?;

    let Value::Array(items) = value else {
        return Err(ProcessorError::InvalidInput(format!(
            "{} must contain a JSON array of records",
            path.display()
        )));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| match item {
            Value::Object(map) => Ok(map),
            _ => Err(ProcessorError::InvalidInput(format!(
                "record {} is not a JSON object",
                idx
            ))),
        })
        .collect()
}
