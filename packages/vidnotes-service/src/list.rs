use serde::{Deserialize, Serialize};

use crate::{NoteService, Result};
use vidnotes_domain::{
	links,
	query::{NoteFields, NoteQuery},
	time_codec,
};
use vidnotes_storage::models::{Note, Store, VideoRecord};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ListRequest {
	/// Free-text filter. Blank lists everything.
	#[serde(default, rename = "q")]
	pub query: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ListResponse {
	pub videos: Vec<VideoItem>,
	/// Matched notes across all listed videos.
	pub note_count: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VideoItem {
	pub video_id: String,
	pub title: String,
	/// `title`, or the video id when no title was ever captured.
	pub display_title: String,
	/// All notes stored for the video, matched or not.
	pub total_notes: usize,
	pub latest_created_at: i64,
	/// Matched notes, newest first.
	pub notes: Vec<NoteItem>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NoteItem {
	pub note_id: String,
	pub timestamp_sec: u64,
	pub time_label: String,
	pub note_text: String,
	pub created_at: i64,
	pub url: String,
}

impl NoteService {
	pub async fn list_videos(&self, req: ListRequest) -> Result<ListResponse> {
		let store = self.store.load().await?;
		let query = NoteQuery::new(&req.query);

		Ok(project(&store, &query, &self.cfg.notes.watch_url_base))
	}
}

/// Filters and orders the document into the listing view.
///
/// Videos are ordered by their newest note, newest first; ties fall back to video id. Videos left
/// without matches are omitted.
pub(crate) fn project(store: &Store, query: &NoteQuery, watch_url_base: &str) -> ListResponse {
	let mut videos = store
		.videos
		.iter()
		.filter_map(|(video_id, video)| project_video(video_id, video, query, watch_url_base))
		.collect::<Vec<_>>();

	videos.sort_by(|a, b| b.latest_created_at.cmp(&a.latest_created_at));

	let note_count = videos.iter().map(|video| video.notes.len()).sum();

	ListResponse { videos, note_count }
}

fn project_video(
	video_id: &str,
	video: &VideoRecord,
	query: &NoteQuery,
	watch_url_base: &str,
) -> Option<VideoItem> {
	let display_title = if video.title.is_empty() { video_id } else { video.title.as_str() };
	let notes = video
		.notes
		.iter()
		.filter(|note| {
			query.matches(&NoteFields {
				title: display_title,
				video_id,
				note_text: &note.note_text,
				timestamp_sec: note.timestamp_sec,
			})
		})
		.map(|note| note_item(video_id, note, watch_url_base))
		.collect::<Vec<_>>();

	if notes.is_empty() {
		return None;
	}

	Some(VideoItem {
		video_id: video_id.to_string(),
		title: video.title.clone(),
		display_title: display_title.to_string(),
		total_notes: video.notes.len(),
		latest_created_at: video.latest_created_at().unwrap_or_default(),
		notes,
	})
}

fn note_item(video_id: &str, note: &Note, watch_url_base: &str) -> NoteItem {
	NoteItem {
		note_id: note.id.clone(),
		timestamp_sec: note.timestamp_sec,
		time_label: time_codec::format_time(note.timestamp_sec),
		note_text: note.note_text.clone(),
		created_at: note.created_at,
		url: links::watch_url(watch_url_base, video_id, note.timestamp_sec),
	}
}
