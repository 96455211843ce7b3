pub mod add_note;
pub mod admin;
pub mod delete;
pub mod list;
pub mod transfer;

mod error;

pub use add_note::{AddNoteRequest, AddNoteResponse};
pub use delete::{DeleteRequest, DeleteResponse};
pub use error::{Error, Result};
pub use list::{ListRequest, ListResponse, NoteItem, VideoItem};
pub use transfer::{EXPORT_FILE_NAME, ExportResponse, ImportResponse};

use std::sync::Arc;

use time::OffsetDateTime;

use vidnotes_config::Config;
use vidnotes_storage::DocumentStore;

/// Source of `createdAt` stamps, in Unix epoch milliseconds.
pub trait Clock
where
	Self: Send + Sync,
{
	fn now_millis(&self) -> i64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NoteOp {
	Add,
	Delete,
	None,
}

/// Note repository over the persisted document.
///
/// Every operation loads the whole document, applies one change, and saves it back. Nothing is
/// held between calls, so any number of services (in one process or several) can point at the
/// same storage. They are not coordinated: overlapping operations race and the later save wins.
pub struct NoteService {
	pub cfg: Config,
	pub store: DocumentStore,
	pub clock: Arc<dyn Clock>,
}

struct SystemClock;

impl Clock for SystemClock {
	fn now_millis(&self) -> i64 {
		(OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
	}
}

impl NoteService {
	pub fn new(cfg: Config, store: DocumentStore) -> Self {
		Self { cfg, store, clock: Arc::new(SystemClock) }
	}

	pub fn with_clock(cfg: Config, store: DocumentStore, clock: Arc<dyn Clock>) -> Self {
		Self { cfg, store, clock }
	}

	/// Opens the file-backed document named by `cfg.storage`.
	pub fn open(cfg: Config) -> Self {
		let store = DocumentStore::open(&cfg.storage);

		Self::new(cfg, store)
	}
}
