use std::{io::Write, path::PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre;
use tracing_subscriber::EnvFilter;

use vidnotes_domain::time_codec;
use vidnotes_service::{
	AddNoteRequest, DeleteRequest, ListRequest, ListResponse, NoteOp, NoteService,
};

#[derive(Debug, Parser)]
#[command(
	version = vidnotes_cli::VERSION,
	rename_all = "kebab",
	styles = vidnotes_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
	#[command(subcommand)]
	pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
	/// Add a note at a playback position.
	Add {
		#[arg(long, value_name = "VIDEO_ID")]
		video: String,
		#[arg(long, default_value = "")]
		title: String,
		/// Seconds, `M:SS`, or `H:MM:SS`.
		#[arg(long, value_name = "TIME", value_parser = parse_at)]
		at: u64,
		text: String,
	},
	/// Delete one note. Unknown ids are ignored.
	Delete {
		#[arg(long, value_name = "VIDEO_ID")]
		video: String,
		#[arg(long, value_name = "NOTE_ID")]
		note: String,
	},
	/// List notes grouped by video, optionally filtered.
	List {
		#[arg(long, short = 'q', default_value = "")]
		query: String,
		#[arg(long)]
		json: bool,
	},
	/// Write every note as JSON to a file or stdout.
	Export {
		#[arg(long, short = 'o', value_name = "FILE")]
		out: Option<PathBuf>,
	},
	/// Replace every note with the contents of an export file.
	Import {
		#[arg(value_name = "FILE")]
		file: PathBuf,
	},
	/// Delete every note.
	Clear {
		#[arg(long)]
		yes: bool,
	},
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let config = vidnotes_config::load(&args.config)?;

	init_tracing(&config);

	let service = NoteService::open(config);
	let mut stdout = std::io::stdout().lock();

	execute(&service, args.command, &mut stdout).await
}

/// Runs one subcommand, writing user-facing output to `out`.
pub async fn execute(
	service: &NoteService,
	command: Command,
	out: &mut dyn Write,
) -> color_eyre::Result<()> {
	match command {
		Command::Add { video, title, at, text } => {
			let req =
				AddNoteRequest { video_id: video, title, timestamp_sec: at, note_text: text }
					.gated(&service.cfg)?;
			let response = service.add_note(req).await?;

			writeln!(
				out,
				"Added note {} to {} at {}.",
				response.note_id,
				response.video_id,
				time_codec::format_time(at)
			)?;
		},
		Command::Delete { video, note } => {
			let response =
				service.delete_note(DeleteRequest { video_id: video, note_id: note }).await?;

			match (response.op, response.video_removed) {
				(NoteOp::Delete, true) => writeln!(
					out,
					"Deleted note {}; the video has no notes left.",
					response.note_id
				)?,
				(NoteOp::Delete, false) => writeln!(out, "Deleted note {}.", response.note_id)?,
				_ => writeln!(out, "No note {} found; nothing changed.", response.note_id)?,
			}
		},
		Command::List { query, json } => {
			let response = service.list_videos(ListRequest { query }).await?;

			if json {
				writeln!(out, "{}", serde_json::to_string_pretty(&response)?)?;
			} else {
				render_list(&response, out)?;
			}
		},
		Command::Export { out: path } => {
			let export = service.export_all().await?;

			match path {
				Some(path) => {
					tokio::fs::write(&path, export.body.as_bytes()).await?;

					writeln!(
						out,
						"Exported {} notes across {} videos to {}.",
						export.note_count,
						export.video_count,
						path.display()
					)?;
				},
				None => writeln!(out, "{}", export.body)?,
			}
		},
		Command::Import { file } => {
			let raw = tokio::fs::read_to_string(&file).await?;
			let response = service.import_all(&raw).await?;

			writeln!(
				out,
				"Imported {} notes across {} videos.",
				response.note_count, response.video_count
			)?;
		},
		Command::Clear { yes } => {
			if !yes {
				return Err(eyre::eyre!("Refusing to delete every note without --yes."));
			}

			service.clear_all().await?;

			writeln!(out, "Deleted every note.")?;
		},
	}

	Ok(())
}

fn render_list(response: &ListResponse, out: &mut dyn Write) -> std::io::Result<()> {
	if response.videos.is_empty() {
		return writeln!(out, "No notes.");
	}

	for video in &response.videos {
		writeln!(out, "{} ({})", video.display_title, video.video_id)?;

		for note in &video.notes {
			writeln!(out, "  [{}] {}", note.time_label, note.note_text)?;
			writeln!(out, "    {}  id={}", note.url, note.note_id)?;
		}
	}

	Ok(())
}

fn parse_at(raw: &str) -> Result<u64, String> {
	time_codec::parse_time(raw)
		.ok_or_else(|| format!("{raw:?} is not a time; use seconds, M:SS, or H:MM:SS."))
}

fn init_tracing(config: &vidnotes_config::Config) {
	let filter =
		EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
