//! Conversion between playback positions in whole seconds and the `M:SS` / `H:MM:SS` text shown
//! to users.
//!
//! The formatted text doubles as a search field, so display and search always agree on how a
//! position is spelled.

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 3_600;

/// Renders `total_seconds` as `H:MM:SS` when at least one hour long, otherwise `M:SS`.
///
/// The leading field is never padded, so `59` renders as `0:59` and `3661` as `1:01:01`.
pub fn format_time(total_seconds: u64) -> String {
	let hours = total_seconds / SECONDS_PER_HOUR;
	let minutes = (total_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
	let seconds = total_seconds % SECONDS_PER_MINUTE;

	if hours > 0 {
		format!("{hours}:{minutes:02}:{seconds:02}")
	} else {
		format!("{minutes}:{seconds:02}")
	}
}

/// Parses `S`, `M:SS`, or `H:MM:SS` back into seconds.
///
/// Fields after the first must be below 60. Returns `None` for anything else, including
/// overflow.
pub fn parse_time(text: &str) -> Option<u64> {
	let fields = text.trim().split(':').map(parse_field).collect::<Option<Vec<_>>>()?;

	match fields.as_slice() {
		[seconds] => Some(*seconds),
		[minutes, seconds] if *seconds < SECONDS_PER_MINUTE =>
			minutes.checked_mul(SECONDS_PER_MINUTE)?.checked_add(*seconds),
		[hours, minutes, seconds]
			if *minutes < SECONDS_PER_MINUTE && *seconds < SECONDS_PER_MINUTE =>
			hours
				.checked_mul(SECONDS_PER_HOUR)?
				.checked_add(minutes * SECONDS_PER_MINUTE)?
				.checked_add(*seconds),
		_ => None,
	}
}

fn parse_field(field: &str) -> Option<u64> {
	if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
		return None;
	}

	field.parse().ok()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn formats_reference_positions() {
		assert_eq!(format_time(0), "0:00");
		assert_eq!(format_time(59), "0:59");
		assert_eq!(format_time(60), "1:00");
		assert_eq!(format_time(125), "2:05");
		assert_eq!(format_time(3_599), "59:59");
		assert_eq!(format_time(3_600), "1:00:00");
		assert_eq!(format_time(3_661), "1:01:01");
	}

	#[test]
	fn formats_past_a_day_without_wrapping() {
		assert_eq!(format_time(90_061), "25:01:01");
	}

	#[test]
	fn parse_inverts_format() {
		for seconds in [0, 1, 59, 60, 61, 125, 3_599, 3_600, 3_661, 86_399, 90_061] {
			assert_eq!(parse_time(&format_time(seconds)), Some(seconds), "round trip of {seconds}");
		}
	}

	#[test]
	fn parse_accepts_bare_seconds() {
		assert_eq!(parse_time("90"), Some(90));
		assert_eq!(parse_time(" 4000 "), Some(4_000));
	}

	#[test]
	fn parse_rejects_malformed_text() {
		let malformed =
			["", ":", "1:", ":30", "1:60", "1:60:00", "1:00:60", "a:bc", "-5", "1:2:3:4", "+1"];

		for text in malformed {
			assert_eq!(parse_time(text), None, "{text:?} should not parse");
		}
	}

	#[test]
	fn parse_rejects_overflow() {
		assert_eq!(parse_time("99999999999999999999"), None);
		assert_eq!(parse_time(&format!("{}:00:00", u64::MAX)), None);
	}
}
