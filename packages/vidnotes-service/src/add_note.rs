use std::collections::btree_map::Entry;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{NoteOp, NoteService, Result};
use vidnotes_config::Config;
use vidnotes_domain::writegate::{self, NoteInput};
use vidnotes_storage::models::{Note, VideoRecord};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AddNoteRequest {
	pub video_id: String,
	#[serde(default)]
	pub title: String,
	pub timestamp_sec: u64,
	pub note_text: String,
}
impl AddNoteRequest {
	/// Runs the caller-side input gate: trims fields and rejects blank or over-long text and
	/// unusable video ids. [`NoteService::add_note`] itself trusts its input.
	pub fn gated(self, cfg: &Config) -> Result<Self> {
		let gated = writegate::writegate(
			&NoteInput {
				video_id: &self.video_id,
				title: &self.title,
				note_text: &self.note_text,
			},
			cfg,
		)?;

		Ok(Self {
			video_id: gated.video_id,
			title: gated.title,
			timestamp_sec: self.timestamp_sec,
			note_text: gated.note_text,
		})
	}
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AddNoteResponse {
	pub video_id: String,
	pub note_id: String,
	pub created_at: i64,
	pub op: NoteOp,
}

impl NoteService {
	/// Appends a note, creating the video record on first use.
	///
	/// `note_text` must already be trimmed and non-empty. A non-empty `title` that differs from
	/// the stored one replaces it.
	pub async fn add_note(&self, req: AddNoteRequest) -> Result<AddNoteResponse> {
		let AddNoteRequest { video_id, title, timestamp_sec, note_text } = req;
		let mut store = self.store.load().await?;
		let created_at = self.clock.now_millis();
		let note_id = Uuid::new_v4().to_string();
		let video = match store.videos.entry(video_id.clone()) {
			Entry::Vacant(entry) => entry.insert(VideoRecord::new(title)),
			Entry::Occupied(entry) => {
				let video = entry.into_mut();

				if !title.is_empty() && video.title != title {
					tracing::debug!(%video_id, "Refreshing video title.");

					video.title = title;
				}

				video
			},
		};

		video.notes.push(Note { id: note_id.clone(), timestamp_sec, note_text, created_at });
		video.sort_notes();

		self.store.save(&store).await?;

		tracing::info!(%video_id, %note_id, timestamp_sec, "Note added.");

		Ok(AddNoteResponse { video_id, note_id, created_at, op: NoteOp::Add })
	}
}
