use std::path::PathBuf;

use serde::Deserialize;

pub const DEFAULT_STORAGE_KEY: &str = "ytTimestampNotes_v1";
pub const DEFAULT_WATCH_URL_BASE: &str = "https://www.youtube.com/watch";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	pub notes: Notes,
	pub security: Security,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Storage {
	pub data_dir: PathBuf,
	/// Name of the single persisted record. The file backend stores it as `<data_dir>/<key>.json`.
	#[serde(default = "default_storage_key")]
	pub key: String,
	/// Optional. Writes whose encoded document exceeds this many bytes are rejected.
	pub max_document_bytes: Option<u64>,
}
impl Storage {
	pub fn document_path(&self) -> PathBuf {
		self.data_dir.join(format!("{}.json", self.key))
	}
}

#[derive(Debug, Clone, Deserialize)]
pub struct Notes {
	pub max_note_chars: u32,
	#[serde(default = "default_watch_url_base")]
	pub watch_url_base: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Security {
	pub bind_localhost_only: bool,
}

fn default_storage_key() -> String {
	DEFAULT_STORAGE_KEY.to_string()
}

fn default_watch_url_base() -> String {
	DEFAULT_WATCH_URL_BASE.to_string()
}
