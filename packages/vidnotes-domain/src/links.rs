/// Deep link that opens `video_id` at `timestamp_sec` on the watch page under `base`.
pub fn watch_url(base: &str, video_id: &str, timestamp_sec: u64) -> String {
	format!("{base}?v={}&t={timestamp_sec}s", urlencoding::encode(video_id))
}
