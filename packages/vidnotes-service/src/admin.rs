use crate::{NoteService, Result};

impl NoteService {
	/// Drops the persisted document. Later reads see an empty collection.
	pub async fn clear_all(&self) -> Result<()> {
		self.store.clear().await?;

		tracing::info!("Note document cleared.");

		Ok(())
	}
}
