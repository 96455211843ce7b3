//! Free-text note filtering.
//!
//! A query is a single lower-cased substring. A note matches when the substring occurs in any of
//! its video title, note text, formatted timestamp, or video id.

use crate::time_codec;

/// The per-note fields a query is matched against.
#[derive(Debug, Clone, Copy)]
pub struct NoteFields<'a> {
	pub title: &'a str,
	pub video_id: &'a str,
	pub note_text: &'a str,
	pub timestamp_sec: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteQuery {
	needle: Option<String>,
}
impl NoteQuery {
	/// Blank input yields the match-everything query.
	pub fn new(raw: &str) -> Self {
		if raw.trim().is_empty() {
			return Self { needle: None };
		}

		Self { needle: Some(raw.to_lowercase()) }
	}

	pub fn is_match_all(&self) -> bool {
		self.needle.is_none()
	}

	pub fn matches(&self, fields: &NoteFields<'_>) -> bool {
		let Some(needle) = self.needle.as_deref() else {
			return true;
		};

		contains_folded(fields.title, needle)
			|| contains_folded(fields.note_text, needle)
			|| contains_folded(&time_codec::format_time(fields.timestamp_sec), needle)
			|| contains_folded(fields.video_id, needle)
	}
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
	haystack.to_lowercase().contains(needle)
}
