use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The whole persisted note collection.
///
/// Empty video records are never kept; the last note's removal drops its record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
	pub videos: BTreeMap<String, VideoRecord>,
}
impl Store {
	pub fn note_count(&self) -> usize {
		self.videos.values().map(|video| video.notes.len()).sum()
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
	/// Display metadata only. May be empty when the host page had no title to offer.
	#[serde(default)]
	pub title: String,
	/// Newest first.
	pub notes: Vec<Note>,
}
impl VideoRecord {
	pub fn new(title: impl Into<String>) -> Self {
		Self { title: title.into(), notes: Vec::new() }
	}

	/// Re-establishes newest-first order. Stable, so equal `created_at` keep insertion order.
	pub fn sort_notes(&mut self) {
		self.notes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
	}

	pub fn latest_created_at(&self) -> Option<i64> {
		self.notes.iter().map(|note| note.created_at).max()
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
	pub id: String,
	pub timestamp_sec: u64,
	pub note_text: String,
	/// Unix epoch milliseconds.
	pub created_at: i64,
}

#[cfg(test)]
mod tests {
	use super::*;

	fn note(id: &str, created_at: i64) -> Note {
		Note { id: id.to_string(), timestamp_sec: 0, note_text: id.to_string(), created_at }
	}

	#[test]
	fn serializes_with_persisted_field_names() {
		let mut store = Store::default();

		store.videos.insert(
			"v1".to_string(),
			VideoRecord { title: "T".to_string(), notes: vec![note("n1", 7)] },
		);

		let value = serde_json::to_value(&store).expect("Store must serialize.");

		assert_eq!(
			value,
			serde_json::json!({
				"videos": {
					"v1": {
						"title": "T",
						"notes": [
							{ "id": "n1", "timestampSec": 0, "noteText": "n1", "createdAt": 7 }
						]
					}
				}
			})
		);
	}

	#[test]
	fn sort_is_newest_first_and_stable() {
		let mut video = VideoRecord::new("T");

		video.notes = vec![note("a", 1), note("b", 3), note("c", 1), note("d", 2)];
		video.sort_notes();

		let ids = video.notes.iter().map(|note| note.id.as_str()).collect::<Vec<_>>();

		assert_eq!(ids, ["b", "d", "a", "c"]);
		assert_eq!(video.latest_created_at(), Some(3));
	}
}
