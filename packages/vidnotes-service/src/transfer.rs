use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Error, NoteService, Result};
use vidnotes_storage::{document, models::Store};

/// Suggested name for downloaded exports.
pub const EXPORT_FILE_NAME: &str = "youtube-timestamp-notes.json";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExportResponse {
	pub file_name: String,
	/// The whole document as indented JSON, in the persisted shape.
	pub body: String,
	pub video_count: usize,
	pub note_count: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ImportResponse {
	pub video_count: usize,
	pub note_count: usize,
}

impl NoteService {
	pub async fn export_all(&self) -> Result<ExportResponse> {
		let store = self.store.load().await?;
		let body = document::encode_pretty(&store)?;

		Ok(ExportResponse {
			file_name: EXPORT_FILE_NAME.to_string(),
			body,
			video_count: store.videos.len(),
			note_count: store.note_count(),
		})
	}

	/// Replaces the whole document with `raw`, an earlier export.
	///
	/// This is a restore, not a merge: every existing note is dropped. `raw` is fully validated
	/// first, and on any failure nothing is written.
	pub async fn import_all(&self, raw: &str) -> Result<ImportResponse> {
		let store = match parse_import(raw) {
			Ok(store) => store,
			Err(err) => {
				tracing::warn!(error = %err, "Rejected note import.");

				return Err(err);
			},
		};

		self.store.save(&store).await?;

		let response =
			ImportResponse { video_count: store.videos.len(), note_count: store.note_count() };

		tracing::info!(
			videos = response.video_count,
			notes = response.note_count,
			"Note document imported."
		);

		Ok(response)
	}
}

/// Decodes and validates an import payload, then restores the ordering invariants.
pub(crate) fn parse_import(raw: &str) -> Result<Store> {
	let value: Value = serde_json::from_str(raw)
		.map_err(|err| import_error(format!("payload is not valid JSON ({err}).")))?;
	let Some(root) = value.as_object() else {
		return Err(import_error("payload must be a JSON object.".to_string()));
	};

	match root.get("videos") {
		None | Some(Value::Null) =>
			return Err(import_error("payload is missing the top-level videos field.".to_string())),
		Some(Value::Object(_)) => {},
		Some(_) => return Err(import_error("videos must be an object.".to_string())),
	}

	let mut store: Store = serde_json::from_value(value)
		.map_err(|err| import_error(format!("payload does not match the note layout ({err}).")))?;
	let mut seen_ids = HashSet::new();

	for (video_id, video) in &store.videos {
		for (idx, note) in video.notes.iter().enumerate() {
			if note.note_text.trim().is_empty() {
				return Err(import_error(format!(
					"videos.{video_id}.notes[{idx}].noteText must be non-empty."
				)));
			}
			if !seen_ids.insert(note.id.as_str()) {
				return Err(import_error(format!(
					"videos.{video_id}.notes[{idx}].id duplicates note id {}.",
					note.id
				)));
			}
		}
	}

	store.videos.retain(|_, video| !video.notes.is_empty());

	for video in store.videos.values_mut() {
		video.sort_notes();
	}

	Ok(store)
}

fn import_error(message: String) -> Error {
	Error::ImportFormat { message }
}
