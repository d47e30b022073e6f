//! File I/O for API payloads and exported documents
//!
//! Payloads are JSON saved from the REST API, either a bare array of
//! records or the `{"status": ..., "data": [...]}` envelope. Documents are
//! written atomically so a failed export never leaves half a file behind.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::FinsightError;

#[derive(Deserialize)]
#[serde(untagged)]
enum Payload<T> {
    Bare(Vec<T>),
    Envelope {
        #[serde(default)]
        status: Option<String>,
        data: Vec<T>,
    },
}

/// Read a list of records from an API payload file
pub fn read_records<T, P>(path: P) -> Result<Vec<T>, FinsightError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Err(FinsightError::input(
            path.display().to_string(),
            "file not found",
        ));
    }

    let file = File::open(path)
        .map_err(|e| FinsightError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let payload: Payload<T> = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        FinsightError::input(
            path.display().to_string(),
            format!("expected an array of records or a {{status, data}} envelope ({})", e),
        )
    })?;

    let records = match payload {
        Payload::Bare(records) => records,
        Payload::Envelope { status, data } => {
            if let Some(status) = status.filter(|s| s != "success") {
                tracing::warn!(path = %path.display(), %status, "payload status is not success");
            }
            data
        }
    };

    tracing::debug!(path = %path.display(), records = records.len(), "loaded records");
    Ok(records)
}

/// Write a text document atomically (write to temp, then rename)
pub fn write_document_atomic<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), FinsightError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            FinsightError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = Path::new(&temp_name);

    let file = File::create(temp_path)
        .map_err(|e| FinsightError::Io(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .map_err(|e| FinsightError::Io(format!("Failed to write document: {}", e)))?;

    writer
        .flush()
        .map_err(|e| FinsightError::Io(format!("Failed to flush document: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| FinsightError::Io(format!("Failed to sync document: {}", e)))?;

    fs::rename(temp_path, path).map_err(|e| {
        let _ = fs::remove_file(temp_path);
        FinsightError::Io(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
