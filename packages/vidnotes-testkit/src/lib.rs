mod error;

pub use error::{Error, Result};

use std::{
	fs,
	path::{Path, PathBuf},
};

use serde_json::Value;
use tempfile::TempDir;

pub const TEST_STORAGE_KEY: &str = "ytTimestampNotes_v1";

/// A disposable data directory holding one note document. Removed on drop.
pub struct TestDataDir {
	dir: TempDir,
	key: String,
}
impl TestDataDir {
	pub fn new() -> Result<Self> {
		Self::with_key(TEST_STORAGE_KEY)
	}

	pub fn with_key(key: &str) -> Result<Self> {
		let dir = tempfile::Builder::new().prefix("vidnotes_test_").tempdir()?;

		Ok(Self { dir, key: key.to_string() })
	}

	pub fn path(&self) -> &Path {
		self.dir.path()
	}

	pub fn key(&self) -> &str {
		&self.key
	}

	/// A valid config whose storage points at this directory.
	pub fn config(&self) -> vidnotes_config::Config {
		vidnotes_config::Config {
			service: vidnotes_config::Service {
				http_bind: "127.0.0.1:0".to_string(),
				log_level: "info".to_string(),
			},
			storage: vidnotes_config::Storage {
				data_dir: self.path().to_path_buf(),
				key: self.key.clone(),
				max_document_bytes: None,
			},
			notes: vidnotes_config::Notes {
				max_note_chars: 5_000,
				watch_url_base: vidnotes_config::DEFAULT_WATCH_URL_BASE.to_string(),
			},
			security: vidnotes_config::Security { bind_localhost_only: true },
		}
	}

	/// Where the file backend keeps the document for this directory and key.
	pub fn document_path(&self) -> PathBuf {
		self.path().join(format!("{}.json", self.key))
	}

	pub fn document_exists(&self) -> bool {
		self.document_path().exists()
	}

	pub fn write_raw(&self, raw: &str) -> Result<()> {
		fs::write(self.document_path(), raw)?;

		Ok(())
	}

	pub fn read_raw(&self) -> Result<Option<String>> {
		let path = self.document_path();

		if !path.exists() {
			return Ok(None);
		}

		Ok(Some(fs::read_to_string(path)?))
	}

	/// Parses the persisted document, failing when none exists.
	pub fn read_json(&self) -> Result<Value> {
		let raw = self
			.read_raw()?
			.ok_or_else(|| Error::Message("No document has been persisted.".to_string()))?;

		Ok(serde_json::from_str(&raw)?)
	}

	/// Leftover temporary files from interrupted writes.
	pub fn stray_temp_files(&self) -> Result<Vec<PathBuf>> {
		let mut strays = Vec::new();

		for entry in fs::read_dir(self.path())? {
			let path = entry?.path();

			if path.extension().is_some_and(|ext| ext == "tmp") {
				strays.push(path);
			}
		}

		Ok(strays)
	}
}

/// A two-video document in the persisted shape, newest notes first.
pub fn sample_document() -> Value {
	serde_json::json!({
		"videos": {
			"dQw4w9WgXcQ": {
				"title": "Never Gonna Give You Up",
				"notes": [
					{
						"id": "n-2",
						"timestampSec": 43,
						"noteText": "Chorus starts",
						"createdAt": 1_700_000_002_000_i64
					},
					{
						"id": "n-1",
						"timestampSec": 0,
						"noteText": "Intro",
						"createdAt": 1_700_000_001_000_i64
					}
				]
			},
			"jNQXAC9IVRw": {
				"title": "Me at the zoo",
				"notes": [
					{
						"id": "n-3",
						"timestampSec": 5,
						"noteText": "Elephants",
						"createdAt": 1_700_000_000_500_i64
					}
				]
			}
		}
	})
}
