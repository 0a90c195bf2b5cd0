//! Asynchronous document loading
//!
//! File reads run concurrently and join all-or-nothing: a single
//! unreadable or malformed file fails the whole batch, so no partial
//! aggregation ever reaches the caller.

use std::path::{Path, PathBuf};

use freq_charts_shared::{Error, ParsedDocument, Result};

/// Read and parse one JSON document.
pub async fn load_document(path: impl AsRef<Path>) -> Result<ParsedDocument> {
    let path = path.as_ref();
    let name = document_name(path);

    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|error| Error::file_read(path.display().to_string(), error.to_string()))?;

    let data = serde_json::from_str(&raw)
        .map_err(|error| Error::parse(name.clone(), error.to_string()))?;

    log::debug!("loaded {name} ({} bytes)", raw.len());
    Ok(ParsedDocument::new(name, data))
}

/// Load every path concurrently; the first failure fails the batch.
pub async fn load_batch(paths: &[PathBuf]) -> Result<Vec<ParsedDocument>> {
    futures::future::try_join_all(paths.iter().map(load_document)).await
}

fn document_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
