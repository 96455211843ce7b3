use serde::{Deserialize, Serialize};

use crate::{NoteOp, NoteService, Result};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeleteRequest {
	pub video_id: String,
	pub note_id: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
	pub note_id: String,
	pub op: NoteOp,
	/// The note was the video's last, so the video record is gone too.
	pub video_removed: bool,
}

impl NoteService {
	/// Removes one note. Unknown videos and unknown note ids are already-satisfied no-ops and
	/// leave the persisted document untouched.
	pub async fn delete_note(&self, req: DeleteRequest) -> Result<DeleteResponse> {
		let DeleteRequest { video_id, note_id } = req;
		let mut store = self.store.load().await?;
		let Some(video) = store.videos.get_mut(&video_id) else {
			return Ok(DeleteResponse { note_id, op: NoteOp::None, video_removed: false });
		};
		let before = video.notes.len();

		video.notes.retain(|note| note.id != note_id);

		if video.notes.len() == before {
			return Ok(DeleteResponse { note_id, op: NoteOp::None, video_removed: false });
		}

		let video_removed = video.notes.is_empty();

		if video_removed {
			store.videos.remove(&video_id);
		}

		self.store.save(&store).await?;

		tracing::info!(%video_id, %note_id, video_removed, "Note deleted.");

		Ok(DeleteResponse { note_id, op: NoteOp::Delete, video_removed })
	}
}
