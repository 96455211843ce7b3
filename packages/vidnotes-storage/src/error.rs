use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("I/O failure on {path:?}: {source}")]
	Io { path: PathBuf, source: std::io::Error },
	#[error("Persisted document is not valid JSON for the note store: {0}")]
	Decode(#[source] serde_json::Error),
	#[error("Failed to encode the note store: {0}")]
	Encode(#[source] serde_json::Error),
	#[error("Document of {bytes} bytes exceeds the storage quota of {quota} bytes.")]
	QuotaExceeded { bytes: u64, quota: u64 },
}
