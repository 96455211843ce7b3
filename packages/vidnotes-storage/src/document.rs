use std::sync::Arc;

use crate::{Error, Result, StoreBackend, file::FileBackend, models::Store};

/// Load/save/clear boundary for the single note document.
///
/// Every call goes to the backend; no decoded copy is cached between calls. A `load` followed
/// by a `save` is not guarded against other writers, so concurrent read-modify-write cycles from
/// separate callers resolve as last-write-wins over the whole document.
#[derive(Clone)]
pub struct DocumentStore {
	backend: Arc<dyn StoreBackend>,
}
impl DocumentStore {
	pub fn new(backend: Arc<dyn StoreBackend>) -> Self {
		Self { backend }
	}

	pub fn open(cfg: &vidnotes_config::Storage) -> Self {
		Self::new(Arc::new(FileBackend::from_config(cfg)))
	}

	/// Returns `{ videos: {} }` when nothing has been persisted.
	pub async fn load(&self) -> Result<Store> {
		let Some(bytes) = self.backend.read().await? else {
			tracing::debug!("No persisted note document, starting empty.");

			return Ok(Store::default());
		};
		let store: Store = serde_json::from_slice(&bytes).map_err(Error::Decode)?;

		tracing::debug!(
			bytes = bytes.len(),
			videos = store.videos.len(),
			"Loaded note document."
		);

		Ok(store)
	}

	pub async fn save(&self, store: &Store) -> Result<()> {
		let bytes = serde_json::to_vec(store).map_err(Error::Encode)?;
		let len = bytes.len();

		self.backend.write(bytes).await?;

		tracing::debug!(bytes = len, videos = store.videos.len(), "Saved note document.");

		Ok(())
	}

	pub async fn clear(&self) -> Result<()> {
		self.backend.remove().await
	}
}

/// Stable human-readable rendering used for exports.
pub fn encode_pretty(store: &Store) -> Result<String> {
	serde_json::to_string_pretty(store).map_err(Error::Encode)
}
