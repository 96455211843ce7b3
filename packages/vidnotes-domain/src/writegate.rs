use regex::Regex;

const VIDEO_ID_PATTERN: &str = r"^[^\s\p{Cc}]+$";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectCode {
	RejectEmpty,
	RejectTooLong,
	RejectMissingVideoId,
	RejectInvalidVideoId,
}
impl RejectCode {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::RejectEmpty => "REJECT_EMPTY",
			Self::RejectTooLong => "REJECT_TOO_LONG",
			Self::RejectMissingVideoId => "REJECT_MISSING_VIDEO_ID",
			Self::RejectInvalidVideoId => "REJECT_INVALID_VIDEO_ID",
		}
	}

	/// The request field the rejection refers to.
	pub fn field(self) -> &'static str {
		match self {
			Self::RejectEmpty | Self::RejectTooLong => "note_text",
			Self::RejectMissingVideoId | Self::RejectInvalidVideoId => "video_id",
		}
	}
}

pub struct NoteInput<'a> {
	pub video_id: &'a str,
	pub title: &'a str,
	pub note_text: &'a str,
}

/// A note that passed the gate, with surrounding whitespace removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatedNote {
	pub video_id: String,
	pub title: String,
	pub note_text: String,
}

/// Checks caller input before it reaches the note store, which trusts its inputs.
pub fn writegate(
	input: &NoteInput<'_>,
	cfg: &vidnotes_config::Config,
) -> Result<GatedNote, RejectCode> {
	let video_id = input.video_id.trim();

	if video_id.is_empty() {
		return Err(RejectCode::RejectMissingVideoId);
	}
	if !is_valid_video_id(video_id) {
		return Err(RejectCode::RejectInvalidVideoId);
	}

	let note_text = input.note_text.trim();

	if note_text.is_empty() {
		return Err(RejectCode::RejectEmpty);
	}
	if note_text.chars().count() as u64 > u64::from(cfg.notes.max_note_chars) {
		return Err(RejectCode::RejectTooLong);
	}

	Ok(GatedNote {
		video_id: video_id.to_string(),
		title: input.title.trim().to_string(),
		note_text: note_text.to_string(),
	})
}

fn is_valid_video_id(video_id: &str) -> bool {
	Regex::new(VIDEO_ID_PATTERN).map(|re| re.is_match(video_id)).unwrap_or(false)
}
